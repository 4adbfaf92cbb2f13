use std::cell::{
    RefCell, RefMut
};
use std::collections::HashMap;

use log::debug;

use super::managererror::ManagerError;
use super::namedobject::NamedJsonObject;


pub trait IManager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        let map = self.map();
        map.get(name)
            .cloned()
            .ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.map().contains_key(name)
    }

    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map().keys().cloned().collect();
        names.sort();
        names
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}


impl <V> Manager<V> where
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager {map_cell: RefCell::new(HashMap::new()), get_obj_from_json}
    }

    pub fn insert(&self, name: &str, v: V) {
        self.map().insert(name.to_owned(), v);
    }

    /// Moves every entry of `other` into this manager, replacing entries
    /// with the same name.
    pub fn merge(&self, other: Manager<V>) {
        self.map().extend(other.map_cell.into_inner());
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }
}

impl <V> IManager<V> for Manager<V> where
    V: Clone {
    fn map(&self) -> RefMut<'_, HashMap<String, V>> {
        self.map_cell.borrow_mut()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", named_object.name());
        self.insert(named_object.name(), v);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn get_f64_from_json(json_value: serde_json::Value) -> Result<f64, ManagerError> {
        let value = json_value
            .get("value")
            .and_then(serde_json::Value::as_f64)
            .unwrap_or_default();
        Ok(value)
    }

    #[test]
    fn inserts_named_objects_and_looks_them_up() {
        let manager = Manager::new(get_f64_from_json);
        manager
            .insert_obj_from_json_vec(&[
                json!({"name": "b", "value": 2.0}),
                json!({"name": "a", "value": 1.0})
            ])
            .unwrap();
        assert_eq!(manager.get("a").unwrap(), 1.0);
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned()]);
        assert!(manager.contains("b"));
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn unknown_name_is_reported() {
        let manager = Manager::new(get_f64_from_json);
        let error = manager.get("missing").unwrap_err();
        assert!(matches!(error, ManagerError::NameNotFoundError(ref name) if name == "missing"));
        assert_eq!(error.to_string(), "key 'missing' not found");
    }

    #[test]
    fn merge_moves_entries_and_overrides_names() {
        let manager = Manager::new(get_f64_from_json);
        manager.insert("a", 1.0);
        manager.insert("b", 2.0);
        let staged = Manager::new(get_f64_from_json);
        staged.insert("b", 20.0);
        staged.insert("c", 30.0);
        manager.merge(staged);
        assert_eq!(manager.names(), vec!["a".to_owned(), "b".to_owned(), "c".to_owned()]);
        assert_eq!(manager.get("b").unwrap(), 20.0);
    }

    #[test]
    fn object_without_name_is_rejected() {
        let manager = Manager::new(get_f64_from_json);
        let error = manager.insert_obj_from_json(json!({"value": 3.0})).unwrap_err();
        assert!(matches!(error, ManagerError::JsonParseError(_)));
        assert!(manager.is_empty());
    }
}
