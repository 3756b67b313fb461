/// Ordered `key: value` header of a post, as written by the site generator.
///
/// Keys are lowercased and trimmed. Insertion order is kept; a duplicate key
/// overwrites the earlier value in place. Unknown keys are preserved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Splits a raw post into its header mapping and body text.
    ///
    /// Lines are scanned from the top until the first blank line. Header
    /// lines without a `:` are silently ignored. If there is no blank line
    /// at all, the whole file is header and the body is empty.
    pub fn parse(text: &str) -> (Metadata, String) {
        let mut metadata = Metadata::default();
        let mut lines = text.lines();

        for line in lines.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                metadata.insert(&key.trim().to_lowercase(), value.trim());
            }
        }

        let body = lines.collect::<Vec<_>>().join("\n");
        (metadata, body.trim().to_string())
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reconstructs the header as `key: value` lines. Parsing the result
    /// again yields an equal mapping.
    pub fn to_lines(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
