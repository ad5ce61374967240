//! Document expansion: one output page per (source page, grid cell).
//!
//! Each sub-region page is a shallow clone of its source page: the page
//! dictionary is duplicated with a narrowed MediaBox, while the Contents
//! stream and Resources keep pointing at the original objects by reference.
//! The resulting page tree lists the clones in strict page -> row -> column
//! order, which defines the position every later stage is addressed by.

use log::debug;
use lopdf::{Dictionary, Document, Object, ObjectId};
use pdfparts_core::{GridSpec, PageBox};

use crate::document::{page_box, resolve_inherited};
use crate::error::{PartsError, Result};

/// Attributes gathered from one source page before any mutation.
struct PageSeed {
    dict: Dictionary,
    media: PageBox,
    resources: Option<Object>,
    rotate: Option<Object>,
}

/// Expand `source` into a new document with `rows * columns` sub-region
/// pages per source page.
///
/// Inheritable attributes (Resources, Rotate) are resolved through the
/// /Parent chain and pinned onto each clone, so re-parenting the clones
/// directly under the page tree root cannot change their effective values.
pub fn expand(source: &Document, grid: GridSpec) -> Result<Document> {
    let mut out = source.clone();
    let page_ids: Vec<ObjectId> = out.get_pages().values().copied().collect();

    let root_id = out
        .trailer
        .get(b"Root")
        .and_then(|o| o.as_reference())
        .map_err(|e| PartsError::Expand(format!("missing document catalog: {e}")))?;
    let pages_id = out
        .get_dictionary(root_id)
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(|o| o.as_reference())
        .map_err(|e| PartsError::Expand(format!("missing page tree root: {e}")))?;

    let mut seeds = Vec::with_capacity(page_ids.len());
    for &page_id in &page_ids {
        let media = page_box(&out, page_id)?;
        if !media.is_valid() {
            return Err(PartsError::Expand(format!(
                "page has a degenerate MediaBox: [{} {} {} {}]",
                media.x1, media.y1, media.x2, media.y2
            )));
        }
        let dict = out
            .get_dictionary(page_id)
            .map_err(|e| PartsError::Expand(format!("failed to get page dictionary: {e}")))?
            .clone();
        let resources = resolve_inherited(&out, page_id, b"Resources")?.cloned();
        let rotate = resolve_inherited(&out, page_id, b"Rotate")?.cloned();
        seeds.push(PageSeed {
            dict,
            media,
            resources,
            rotate,
        });
    }

    let mut kids: Vec<ObjectId> = Vec::with_capacity(seeds.len() * grid.cell_count());
    for (p, seed) in seeds.iter().enumerate() {
        for cell in grid.cells() {
            debug!(
                "retrieving page {} (page {}, row {}, column {})",
                grid.position(p, cell) + 1,
                p + 1,
                cell.row + 1,
                cell.column + 1
            );
            let sub = seed.media.cell(grid, cell);
            let mut dict = seed.dict.clone();
            dict.set("MediaBox", media_box_array(sub));
            if let Some(resources) = &seed.resources {
                dict.set("Resources", resources.clone());
            }
            if let Some(rotate) = &seed.rotate {
                dict.set("Rotate", rotate.clone());
            }
            dict.set("Parent", Object::Reference(pages_id));
            kids.push(out.add_object(Object::Dictionary(dict)));
        }
    }

    let count = kids.len();
    let pages = out
        .get_object_mut(pages_id)
        .and_then(|o| o.as_dict_mut())
        .map_err(|e| PartsError::Expand(format!("page tree root is not a dictionary: {e}")))?;
    pages.set(
        "Kids",
        Object::Array(kids.into_iter().map(Object::Reference).collect()),
    );
    pages.set("Count", Object::Integer(count as i64));

    Ok(out)
}

fn media_box_array(b: PageBox) -> Object {
    Object::Array(vec![
        Object::Real(b.x1 as f32),
        Object::Real(b.y1 as f32),
        Object::Real(b.x2 as f32),
        Object::Real(b.y2 as f32),
    ])
}
