mod tests_model_invariants;
