use indexmap::IndexMap;

/// Ordered key/value arguments carried by a button.
///
/// Keys are unique. Re-inserting a key replaces its value but keeps the
/// position of the first insertion.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
  inner: IndexMap<String, String>,
}

impl Arguments {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or overwrites `key`, returning the previous value if any
  pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Option<String> {
    self.inner.insert(key.into(), value.into())
  }

  pub fn get(&self, key: &str) -> Option<&str> {
    self.inner.get(key).map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.inner.len()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.is_empty()
  }

  /// `key&value;` for every pair, no separator between pairs
  pub(crate) fn concat(&self) -> String {
    self
      .iter()
      .map(|(key, value)| format!("{key}&{value};"))
      .collect()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Arguments {
  fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
    let mut args = Arguments::new();
    for (key, value) in iter {
      args.insert(key, value);
    }
    args
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_insert_keeps_first_position() {
    let mut args = Arguments::new();
    args.insert("a", "1");
    args.insert("b", "2");
    assert_eq!(args.insert("a", "3"), Some("1".to_string()));

    let pairs: Vec<_> = args.iter().collect();
    assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    assert_eq!(args.len(), 2);
  }

  #[test]
  fn test_concat_has_no_separator() {
    let args: Arguments = [("action", "reply"), ("id", "7")].into_iter().collect();
    assert_eq!(args.concat(), "action&reply;id&7;");
  }

  #[test]
  fn test_empty() {
    let args = Arguments::new();
    assert!(args.is_empty());
    assert_eq!(args.concat(), "");
    assert_eq!(args.get("missing"), None);
  }
}
