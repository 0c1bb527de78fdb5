mod tests_project_creation;
mod tests_project_loading;
