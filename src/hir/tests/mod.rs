mod tests_scope;
