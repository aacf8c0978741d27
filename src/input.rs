use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::{debug, info};
use quick_xml::events::Event;
use quick_xml::Reader;

/// Errors surfaced by file-based input acquisition.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    /// Extension outside `.txt`/`.doc`/`.docx`; the read is abandoned.
    UnsupportedFileType(String),
    /// The container was readable but its text could not be extracted.
    Document(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::UnsupportedFileType(ext) => {
                write!(f, "unsupported file type '{ext}': use .txt, .doc or .docx")
            }
            Self::Document(reason) => write!(f, "malformed document: {reason}"),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Splits on runs of whitespace and commas and parses each token as `i64`.
/// Non-numeric tokens are skipped per token -- free-form documents are
/// expected to mix words and numbers, so the skip is policy, not an error.
pub fn parse_tokens(text: &str) -> Vec<i64> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!("skipping non-numeric token {token:?}");
                None
            }
        })
        .collect()
}

/// Reads the integer sequence from `path`, dispatching on the extension.
/// Unknown extensions are a hard error, never an empty sequence.
pub fn read_file(path: &Path) -> Result<Vec<i64>, InputError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    let text = match extension.as_str() {
        "txt" => std::fs::read_to_string(path)?,
        "docx" => extract_docx(path)?,
        "doc" => extract_doc(path)?,
        _ => return Err(InputError::UnsupportedFileType(extension)),
    };
    let numbers = parse_tokens(&text);
    info!("parsed {} integers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// `.docx` is a ZIP container; the document text lives in the text nodes of
/// `word/document.xml`.
fn extract_docx(path: &Path) -> Result<String, InputError> {
    let file = File::open(path)?;
    let mut archive =
        zip::ZipArchive::new(file).map_err(|err| InputError::Document(err.to_string()))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|err| InputError::Document(err.to_string()))?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    reader.trim_text(true);
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Text(node)) => {
                let piece = node
                    .unescape()
                    .map_err(|err| InputError::Document(err.to_string()))?;
                text.push_str(&piece);
                text.push(' ');
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(InputError::Document(err.to_string())),
        }
    }
    Ok(text)
}

/// `.doc` is an OLE compound file; the text sits in the `WordDocument`
/// stream as either CP1252 bytes or UTF-16LE code units. NUL density picks
/// the decoding; anything non-printable becomes a token separator, which
/// the tokenizer's skip policy absorbs.
fn extract_doc(path: &Path) -> Result<String, InputError> {
    let mut compound = cfb::open(path).map_err(|err| InputError::Document(err.to_string()))?;
    let mut stream = compound
        .open_stream("/WordDocument")
        .map_err(|_| InputError::Document("missing WordDocument stream".into()))?;
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes)?;

    let nul_count = bytes.iter().filter(|&&b| b == 0).count();
    let text: String = if nul_count * 2 >= bytes.len() {
        bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .map(|unit| match unit {
                0x20..=0x7e => unit as u8 as char,
                _ => ' ',
            })
            .collect()
    } else {
        bytes
            .iter()
            .map(|&b| match b {
                0x20..=0x7e => b as char,
                _ => ' ',
            })
            .collect()
    };
    Ok(text)
}
