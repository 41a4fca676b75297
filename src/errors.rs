use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Dados incompletos")]
    IncompleteInput,

    #[error("Barbeiro inválido")]
    InvalidBarber,

    #[error("Não abrimos {0}")]
    ClosedDay(&'static str),

    #[error("Horário fora do funcionamento")]
    OutsideHours,

    #[error("Data ou horário em formato inválido")]
    MalformedInput,

    #[error("Horário indisponível")]
    SlotConflict,

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::IncompleteInput => StatusCode::BAD_REQUEST,
            AppError::InvalidBarber => StatusCode::BAD_REQUEST,
            AppError::ClosedDay(_) => StatusCode::BAD_REQUEST,
            AppError::OutsideHours => StatusCode::BAD_REQUEST,
            AppError::MalformedInput => StatusCode::BAD_REQUEST,
            AppError::SlotConflict => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "storage failure");
                "Erro interno".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({ "erro": message });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_table() {
        assert_eq!(AppError::IncompleteInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::InvalidBarber.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::ClosedDay("aos domingos").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::OutsideHours.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MalformedInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::SlotConflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::Database(rusqlite::Error::InvalidQuery).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_closed_day_message() {
        assert_eq!(
            AppError::ClosedDay("aos domingos").to_string(),
            "Não abrimos aos domingos"
        );
    }
}
