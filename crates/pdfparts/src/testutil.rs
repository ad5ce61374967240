//! Test fixtures: minimal PDF documents built in memory with lopdf.

use lopdf::{Object, Stream, dictionary};

/// Create a single-page PDF with the given content stream.
///
/// The page carries its own MediaBox of 0 0 612 792 (US Letter).
pub(crate) fn single_page_pdf(content: &[u8]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let stream = Stream::new(dictionary! {}, content.to_vec());
    let content_id = doc.add_object(stream);

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];
    let page_dict = dictionary! {
        "Type" => "Page",
        "MediaBox" => media_box,
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {},
    };
    let page_id = doc.add_object(page_dict);

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => Object::Integer(1),
    };
    let pages_id = doc.add_object(pages_dict);

    if let Ok(page_obj) = doc.get_object_mut(page_id) {
        if let Ok(dict) = page_obj.as_dict_mut() {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Create a multi-page PDF with `page_count` pages.
///
/// When `media_on_pages` is true, each page dictionary carries its own
/// MediaBox; otherwise the MediaBox lives only on the shared Pages node and
/// must be resolved through /Parent. All pages are 612x792.
pub(crate) fn pdf_with_pages(page_count: usize, media_on_pages: bool) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for p in 0..page_count {
        // A small filled square, placed differently per page.
        let content_str = format!("{} {} 20 20 re f", 40 + p * 10, 700);
        let stream = Stream::new(dictionary! {}, content_str.into_bytes());
        let content_id = doc.add_object(stream);

        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {},
        };
        if media_on_pages {
            page_dict.set("MediaBox", media_box.clone());
        }
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let mut pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count as i64),
    };
    if !media_on_pages {
        pages_dict.set("MediaBox", media_box);
    }
    let pages_id = doc.add_object(pages_dict);

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}
