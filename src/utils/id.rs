use core::hash::Hash;
use std::collections::HashMap;

/// Раздаёт ключам номера 1, 2, 3... в порядке первого появления. Повторный ключ получает уже выданный номер.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct IdGenerator<T: Hash + Eq> {
	storage: HashMap<T, u32>,
	counter: u32,
}

impl<T: Hash + Eq> Default for IdGenerator<T> {
	fn default() -> Self {
		IdGenerator {
			storage: HashMap::new(),
			counter: 0,
		}
	}
}

impl<T: Hash + Eq> IdGenerator<T> {
	pub fn get_or_add_id(&mut self, key: T) -> u32 {
		let storage = &mut self.storage;
		let counter = &mut self.counter;
		*storage.entry(key).or_insert_with(|| {
			*counter += 1;
			*counter
		})
	}

	pub fn get_id(&self, key: &T) -> Option<u32> {
		self.storage.get(key).cloned()
	}

	pub fn contains(&self, key: &T) -> bool {
		self.storage.contains_key(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_visit_wins() {
		let mut ids = IdGenerator::default();
		assert_eq!(ids.get_or_add_id("a"), 1);
		assert_eq!(ids.get_or_add_id("b"), 2);
		assert_eq!(ids.get_or_add_id("a"), 1);
		assert_eq!(ids.get_id(&"b"), Some(2));
		assert_eq!(ids.get_id(&"c"), None);
		assert!(ids.contains(&"a"));
	}
}
