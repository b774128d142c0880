/// One note's contribution to the digest, built transiently per resolved row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestSection {
    /// The note's base name (file stem), used as the section heading.
    pub title: String,
    /// Vault-relative path of the source note.
    pub path: String,
    /// Full text content of the note.
    pub body: String,
}

impl DigestSection {
    /// Render the section block: heading, path line, body, and a two-line
    /// `---` separator with a trailing blank line.
    pub fn render(&self) -> String {
        format!(
            "# {}\n\nPath: {}\n\n{}\n\n---\n---\n",
            self.title, self.path, self.body
        )
    }
}

/// Join rendered sections, in row order, with a single newline between blocks.
pub fn join_sections(sections: &[DigestSection]) -> String {
    sections
        .iter()
        .map(DigestSection::render)
        .collect::<Vec<_>>()
        .join("\n")
}
