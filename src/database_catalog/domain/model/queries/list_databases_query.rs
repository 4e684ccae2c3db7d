#[derive(Clone, Debug, Default)]
pub struct ListDatabasesQuery;

impl ListDatabasesQuery {
    pub fn new() -> Self {
        Self
    }
}
