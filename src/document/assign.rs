/*!
 * Assign word-table entries as element content.
 *
 * Each helper resolves the word from the active language first, so a
 * lookup failure leaves the document untouched.
 */

use log::debug;

use crate::document::{Document, Element};
use crate::errors::{LocalizationError, NotFoundKind, Result};
use crate::store::{LanguageStore, WordId};

/// Set the content of the element whose id is `element_id`.
pub fn set_for_id(
    store: &LanguageStore,
    doc: &mut Document,
    element_id: &str,
    set_name: &str,
    word_id: impl Into<WordId>,
) -> Result<()> {
    let word = store.get_word(set_name, word_id)?;

    let element = doc
        .root
        .find_element_mut(|e| e.id.as_deref() == Some(element_id))
        .ok_or_else(|| LocalizationError::NotFound(NotFoundKind::Element(format!("#{}", element_id))))?;

    element.set_text_content(word);
    Ok(())
}

/// Set the content of the first element carrying `class_name`.
pub fn set_for_first_class_element(
    store: &LanguageStore,
    doc: &mut Document,
    class_name: &str,
    set_name: &str,
    word_id: impl Into<WordId>,
) -> Result<()> {
    let word = store.get_word(set_name, word_id)?;

    let element = doc
        .root
        .find_element_mut(|e| e.has_class(class_name))
        .ok_or_else(|| LocalizationError::NotFound(NotFoundKind::Element(format!(".{}", class_name))))?;

    element.set_text_content(word);
    Ok(())
}

/// Set the content of every element carrying `class_name`.
///
/// Returns how many elements were updated; zero is not an error. A match
/// nested inside another match is replaced along with its ancestor's
/// children and is not counted.
pub fn set_for_class_elements(
    store: &LanguageStore,
    doc: &mut Document,
    class_name: &str,
    set_name: &str,
    word_id: impl Into<WordId>,
) -> Result<usize> {
    let word = store.get_word(set_name, word_id)?;

    let elements = doc.root.find_elements_mut(|e| e.has_class(class_name));
    let count = elements.len();
    for element in elements {
        element.set_text_content(word);
    }

    debug!("Set content of {} element(s) with class '{}'", count, class_name);
    Ok(count)
}

/// Set the content of the first `title` element, if the document has one.
pub fn set_page_title(
    store: &LanguageStore,
    doc: &mut Document,
    set_name: &str,
    word_id: impl Into<WordId>,
) -> Result<bool> {
    let word = store.get_word(set_name, word_id)?;

    match doc.root.find_element_mut(is_title) {
        Some(title) => {
            title.set_text_content(word);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn is_title(element: &Element) -> bool {
    element.tag.eq_ignore_ascii_case("title")
}
