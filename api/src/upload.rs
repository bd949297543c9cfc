use axum::extract::Multipart;
use notes_chat::{DocumentProcessor, NotesError, Upload};

/// The parts of an upload form this service understands.
#[derive(Default)]
pub struct UploadForm {
    pub upload: Option<Upload>,
    pub question: Option<String>,
}

impl UploadForm {
    pub fn require_upload(&mut self) -> Result<Upload, NotesError> {
        self.upload
            .take()
            .ok_or_else(|| NotesError::Validation("a 'file' field is required".to_string()))
    }
}

pub async fn read_form(
    processor: &DocumentProcessor,
    mut multipart: Multipart,
) -> Result<UploadForm, NotesError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let media_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                let upload = processor.accept(&filename, media_type.as_deref(), bytes.to_vec())?;
                form.upload = Some(upload);
            }
            Some("question") => {
                form.question = Some(field.text().await.map_err(malformed)?);
            }
            other => {
                log::debug!("Ignoring unexpected form field {:?}", other);
            }
        }
    }

    Ok(form)
}

fn malformed(err: axum::extract::multipart::MultipartError) -> NotesError {
    NotesError::Validation(format!("malformed upload: {}", err.body_text()))
}
