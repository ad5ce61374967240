//! Source document access on top of lopdf.
//!
//! Opening the input file and resolving page attributes that the PDF page
//! tree allows to be inherited through /Parent links.

use std::path::Path;

use lopdf::{Document, Object, ObjectId};
use pdfparts_core::PageBox;

use crate::error::{PartsError, Result};

/// Open the source PDF. A missing or unreadable file is a configuration
/// error; a file that fails to parse as PDF is a PDF error.
pub fn open_source(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(PartsError::Config(format!(
            "file not found: {}",
            path.display()
        )));
    }
    let doc = Document::load(path)?;
    Ok(doc)
}

/// Look up a key in the page dictionary, walking up the page tree
/// (via /Parent) if the key is not found on the page itself.
///
/// Returns `None` if the key is not found anywhere in the tree.
pub(crate) fn resolve_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut current_id = page_id;
    loop {
        let dict = doc
            .get_object(current_id)
            .and_then(|o| o.as_dict())
            .map_err(|e| PartsError::Expand(format!("failed to get page dictionary: {e}")))?;

        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }

        match dict.get(b"Parent") {
            Ok(parent_obj) => {
                current_id = parent_obj
                    .as_reference()
                    .map_err(|e| PartsError::Expand(format!("invalid /Parent reference: {e}")))?;
            }
            Err(_) => return Ok(None),
        }
    }
}

/// Follow a single indirect reference, returning the target object.
fn resolve_ref<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    if let Ok(id) = obj.as_reference() {
        if let Ok(target) = doc.get_object(id) {
            return target;
        }
    }
    obj
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(obj: &Object) -> Result<f64> {
    match obj {
        Object::Integer(i) => Ok(*i as f64),
        Object::Real(f) => Ok(f64::from(*f)),
        _ => Err(PartsError::Expand(format!("expected number, got {obj:?}"))),
    }
}

/// The effective MediaBox of a page, resolved through the /Parent chain.
pub fn page_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    let obj = resolve_inherited(doc, page_id, b"MediaBox")?
        .ok_or_else(|| PartsError::Expand("MediaBox not found on page or ancestors".into()))?;
    let array = resolve_ref(doc, obj)
        .as_array()
        .map_err(|e| PartsError::Expand(format!("MediaBox is not an array: {e}")))?;
    if array.len() != 4 {
        return Err(PartsError::Expand(format!(
            "expected 4-element MediaBox, got {} elements",
            array.len()
        )));
    }
    let x1 = object_to_f64(resolve_ref(doc, &array[0]))?;
    let y1 = object_to_f64(resolve_ref(doc, &array[1]))?;
    let x2 = object_to_f64(resolve_ref(doc, &array[2]))?;
    let y2 = object_to_f64(resolve_ref(doc, &array[3]))?;
    Ok(PageBox::new(x1, y1, x2, y2))
}
