use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::Deserialize;

use super::ApiError;
use crate::models::{CreateTaskInput, UpdateTaskInput};

/// An attachment received with a task form.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// Task fields submitted either as `multipart/form-data` (required when a
/// file is attached) or as a urlencoded form.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub category: String,
    pub description: String,
    pub deadline: Option<String>,
    pub notes: Option<String>,
    pub file: Option<Upload>,
}

impl TaskForm {
    pub fn into_parts(self) -> (CreateTaskInput, Option<Upload>) {
        let input = CreateTaskInput {
            category: self.category,
            description: self.description,
            deadline: self.deadline,
            notes: self.notes,
        };
        (input, self.file)
    }

    pub fn into_update(self) -> (UpdateTaskInput, Option<Upload>) {
        let (input, file) = self.into_parts();
        let update = UpdateTaskInput {
            category: input.category,
            description: input.description,
            deadline: input.deadline,
            notes: input.notes,
        };
        (update, file)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawTaskForm {
    category: Option<String>,
    description: Option<String>,
    deadline: Option<String>,
    notes: Option<String>,
    #[serde(skip)]
    file: Option<Upload>,
}

impl RawTaskForm {
    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut raw = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();
            if name == "file" {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(e.body_text()))?;
                // browsers send an empty part when no file was picked
                if let Some(filename) = filename.filter(|f| !f.is_empty()) {
                    raw.file = Some(Upload { filename, bytes });
                }
                continue;
            }

            let value = field
                .text()
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            match name.as_str() {
                "category" => raw.category = Some(value),
                "description" => raw.description = Some(value),
                "deadline" => raw.deadline = Some(value),
                "notes" => raw.notes = Some(value),
                _ => {}
            }
        }

        Ok(raw)
    }

    fn validate(self) -> Result<TaskForm, ApiError> {
        Ok(TaskForm {
            category: required("category", self.category)?,
            description: required("description", self.description)?,
            deadline: optional(self.deadline),
            notes: optional(self.notes),
            file: self.file,
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::Validation(format!("Field required: {}", field)))
}

fn optional(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl<S> FromRequest<S> for TaskForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let raw = if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            RawTaskForm::from_multipart(multipart).await?
        } else {
            let Form(raw) = Form::<RawTaskForm>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            raw
        };

        raw.validate()
    }
}
