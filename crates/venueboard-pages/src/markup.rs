//! Markup and user-facing text produced by the widgets
//!
//! Kept free of DOM types so it can be checked without a browser.

use venueboard_utils::{UploadRejection, escape_html, format_file_size};

/// Label shown while an action is in progress
pub const LOADING_TEXT: &str = "加载中...";

/// Message shown after a successful clipboard copy
pub const COPIED_TEXT: &str = "复制成功！";

/// Label of the back-to-top button
pub const BACK_TO_TOP_LABEL: &str = "↑";

/// Classes of the back-to-top button
pub const BACK_TO_TOP_CLASS: &str = "btn btn-primary rounded-circle position-fixed";

/// Inline style of the back-to-top button; starts hidden
pub const BACK_TO_TOP_STYLE: &str = "bottom: 20px; right: 20px; width: 50px; height: 50px; z-index: 1000; display: none; font-size: 20px;";

/// Classes of the toast container
pub const TOAST_CONTAINER_CLASS: &str = "position-fixed top-0 end-0 p-3";

/// Stacking order of the toast container
pub const TOAST_Z_INDEX: &str = "1060";

/// Classes of the upload preview container
pub const PREVIEW_CLASS: &str = "mt-3";

/// Card previewing a selected image
///
/// `data_url` comes from `FileReader.readAsDataURL`; the file name is user
/// input and is escaped.
pub fn image_preview(data_url: &str, file_name: &str) -> String {
	format!(
		concat!(
			r#"<div class="card" style="max-width: 300px;">"#,
			r#"<img src="{src}" class="card-img-top" alt="预览图" style="height: 200px; object-fit: cover;">"#,
			r#"<div class="card-body p-2">"#,
			r#"<small class="text-muted">预览：{name}</small>"#,
			r#"</div></div>"#,
		),
		src = escape_html(data_url),
		name = escape_html(file_name),
	)
}

/// Spinner followed by [`LOADING_TEXT`]
pub fn loading_indicator() -> String {
	format!(r#"<span class="spinner-border spinner-border-sm me-2"></span>{LOADING_TEXT}"#)
}

/// Toast body displaying `message`
pub fn toast(message: &str) -> String {
	format!(
		r#"<div class="toast show" role="alert"><div class="toast-body">{}</div></div>"#,
		escape_html(message)
	)
}

/// Alert text for a refused upload
pub fn upload_rejection_message(rejection: &UploadRejection) -> String {
	match rejection {
		UploadRejection::TooLarge { limit, .. } => {
			format!("文件大小不能超过{}", format_file_size(*limit).replace(' ', ""))
		}
		UploadRejection::UnsupportedType { allowed, .. } => {
			let mut formats: Vec<String> = Vec::new();
			for mime in allowed {
				let format = mime.rsplit('/').next().unwrap_or(mime).to_uppercase();
				if !formats.contains(&format) {
					formats.push(format);
				}
			}
			format!("只支持{}格式的图片", formats.join("、"))
		}
	}
}
