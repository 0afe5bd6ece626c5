mod tests_documents;
mod tests_root_presence;
