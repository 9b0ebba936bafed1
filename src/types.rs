//! Snippet record model

/// Description placeholders meaning "no description given".
pub const SENTINELS: [&str; 2] = ["?", "_"];

/// One ticket tag destined for one snippet entry.
///
/// Built once from a spreadsheet row by [`SnippetRecord::from_row`]; `tag`,
/// `name` and `description` are never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    pub tag: String,
    pub name: String,
    pub description: String,
}

impl SnippetRecord {
    /// Normalize the three text cells of a row into a record.
    ///
    /// Returns `None` for blank rows and for the header row (a tag reading
    /// `tag` in any case). A missing name, or a missing or placeholder
    /// description, makes both fields fall back to the tag. Otherwise only the
    /// first line of the description is kept.
    pub fn from_row(
        tag: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Option<Self> {
        let tag = tag.filter(|t| !t.is_empty())?;
        if is_header(&tag) {
            return None;
        }

        let name = name.filter(|n| !n.is_empty());
        let description = description.filter(|d| !SENTINELS.contains(&d.as_str()));

        let (name, description) = match (name, description) {
            (Some(name), Some(description)) => {
                let line = first_line(&description);
                let description = if line.is_empty() {
                    tag.clone()
                } else {
                    line.to_string()
                };
                (name, description)
            }
            _ => (tag.clone(), tag.clone()),
        };

        Some(Self {
            tag,
            name,
            description,
        })
    }

    /// Text the editor expands on, `#` followed by the tag.
    pub fn prefix(&self) -> String {
        format!("#{}", self.tag)
    }
}

fn is_header(tag: &str) -> bool {
    tag.to_lowercase() == "tag"
}

fn first_line(text: &str) -> &str {
    let line = text.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}
