mod tests_uses;
