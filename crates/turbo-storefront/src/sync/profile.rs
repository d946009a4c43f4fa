//! Profile picture preview.

use turbo_data::Transport;

use super::Effect;
use crate::dom::Document;
use crate::{PageContext, SyncError};

/// Last component of a browser file path (`C:\fakepath\me.png` → `me.png`).
pub fn file_name(path: &str) -> &str {
    path.rsplit(['\\', '/']).next().unwrap_or(path)
}

/// Show the chosen picture before upload.
///
/// `object_url` is the blob URL the host created for the selected file.
pub fn preview_profile_picture<D: Document, T: Transport>(
    ctx: &PageContext<D, T>,
    file_path: &str,
    object_url: &str,
) -> Result<Effect, SyncError> {
    let config = ctx.config();
    let s = &config.selectors;
    let mut dom = ctx.dom_mut();
    dom.set_text(
        &s.file_name,
        &format!("{}{}", config.messages.image_uploaded, file_name(file_path)),
    )?;
    dom.set_attribute(&s.profile_picture, "src", object_url)?;
    Ok(Effect::Updated)
}
