//! Seven ways of printing the same object graph.

use crate::bookstore::Bookstore;
use std::fmt::Write;
use std::str::FromStr;
use thiserror::Error;

/// Separator printed before every visualization.
pub const SEPARATOR: &str = "--------------------------------------------------------";

const DUMP_ROW: usize = 16;

/// Rendering failures. The demo prints these and moves on.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Error converting to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Error converting to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error converting to bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Error converting to TOML: {0}")]
    Toml(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visualization {
    Display,
    Debug,
    Json,
    JsonIndented,
    Yaml,
    BincodeDump,
    Toml,
}

impl Visualization {
    pub const ALL: [Visualization; 7] = [
        Visualization::Display,
        Visualization::Debug,
        Visualization::Json,
        Visualization::JsonIndented,
        Visualization::Yaml,
        Visualization::BincodeDump,
        Visualization::Toml,
    ];

    /// 1-based position in the demo.
    pub fn number(&self) -> usize {
        match self {
            Visualization::Display => 1,
            Visualization::Debug => 2,
            Visualization::Json => 3,
            Visualization::JsonIndented => 4,
            Visualization::Yaml => 5,
            Visualization::BincodeDump => 6,
            Visualization::Toml => 7,
        }
    }

    pub fn from_number(n: usize) -> Option<Self> {
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Visualization::Display => "print using \"{}\"",
            Visualization::Debug => "print using \"{:#?}\"",
            Visualization::Json => "print using json",
            Visualization::JsonIndented => "print using json, indented",
            Visualization::Yaml => "print using yaml",
            Visualization::BincodeDump => "print using bincode, hex dump",
            Visualization::Toml => "print using toml",
        }
    }

    pub fn title(&self) -> String {
        format!("Visualization {} ({})", self.number(), self.description())
    }

    /// Full section text: separator, title and body.
    pub fn render(&self, store: &Bookstore) -> Result<String, RenderError> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", SEPARATOR);
        match self {
            Visualization::Display => {
                let _ = writeln!(out, "{}: Bookstore", self.title());
                let _ = writeln!(out, "{}", store);
                if let Some(book) = store.books.first() {
                    let _ = writeln!(out, "{}: A single book", self.title());
                    let _ = writeln!(out, "{}", book);
                }
            }
            Visualization::Debug => {
                let _ = writeln!(out, "{}: Bookstore", self.title());
                let _ = writeln!(out, "{:#?}", store);
                if let Some(book) = store.books.first() {
                    let _ = writeln!(out, "{}: A single book", self.title());
                    let _ = writeln!(out, "{:#?}", book);
                }
            }
            Visualization::Json => {
                let _ = writeln!(out, "{}:", self.title());
                let _ = writeln!(out, "{}", serde_json::to_string(store)?);
            }
            Visualization::JsonIndented => {
                let _ = writeln!(out, "{}:", self.title());
                let _ = writeln!(out, "{}", serde_json::to_string_pretty(store)?);
            }
            Visualization::Yaml => {
                let _ = writeln!(out, "{}:", self.title());
                let _ = writeln!(out, "{}", serde_yaml::to_string(store)?);
            }
            Visualization::BincodeDump => {
                let bytes = bincode::serialize(store)?;
                let _ = writeln!(out, "{}: {} bytes", self.title(), bytes.len());
                out.push_str(&hex_dump(&bytes));
            }
            Visualization::Toml => {
                let _ = writeln!(out, "{}:", self.title());
                let _ = writeln!(out, "{}", toml::to_string_pretty(store)?);
            }
        }
        Ok(out)
    }
}

impl FromStr for Visualization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s
            .parse()
            .map_err(|_| format!("'{}' is not a visualization number", s))?;
        Self::from_number(n).ok_or_else(|| format!("visualization {} does not exist (1-7)", n))
    }
}

/// Offset, hex and printable-ASCII columns, sixteen bytes per row.
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(DUMP_ROW).enumerate() {
        let _ = write!(out, "{:08x}  ", row * DUMP_ROW);
        for i in 0..DUMP_ROW {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02x} ", b);
                }
                None => out.push_str("   "),
            }
            if i == DUMP_ROW / 2 - 1 {
                out.push(' ');
            }
        }
        out.push_str(" |");
        for &b in chunk {
            out.push(if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' });
        }
        out.push_str("|\n");
    }
    out
}
