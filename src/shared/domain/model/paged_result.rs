#[derive(Clone, Debug, PartialEq)]
pub struct PagedResult<T> {
    items: Vec<T>,
    next_cursor: Option<String>,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, next_cursor: Option<String>) -> Self {
        Self { items, next_cursor }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn next_cursor(&self) -> Option<&str> {
        self.next_cursor.as_deref()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
