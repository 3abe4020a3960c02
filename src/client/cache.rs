use serde_json::Value;

/// Ordered list of JSON items cached for one API path.
///
/// Items are matched by their `id` field. String and numeric ids are compared by their
/// textual form, so `"7"` and `7` refer to the same item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cache {
    items: Vec<Value>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every cached item.
    pub fn set(&mut self, items: Vec<Value>) {
        self.items = items;
    }

    /// Appends an item without checking for an existing id.
    pub fn add(&mut self, item: Value) {
        self.items.push(item);
    }

    /// Replaces the item with the same id, or appends it when none matches.
    pub fn update(&mut self, item: Value) {
        let position = id_key(&item)
            .and_then(|key| self.items.iter().position(|i| id_key(i).as_deref() == Some(&key)));

        match position {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.items
            .iter()
            .find(|item| id_key(item).as_deref() == Some(id))
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn id_key(item: &Value) -> Option<String> {
    match item.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
