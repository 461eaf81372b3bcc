//! Error taxonomy for the statement-import pipeline.
//!
//! Structural failures carry messages meant for direct display to the user;
//! row-level anomalies never become errors (parsers skip those rows).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Неподдерживаемый формат файла: «{0}». Поддерживаются CSV и PDF.")]
    UnsupportedFormat(String),

    #[error(
        "Не найдена строка заголовка с колонками «Дата», «Описание» и «Сумма» в первых строках файла"
    )]
    HeaderNotFound,

    #[error("Не удалось найти таблицу операций в тексте выписки")]
    TableMarkerNotFound,

    #[error("В файле не найдено ни одной операции. Проверьте формат выписки и загрузите файл снова.")]
    NoTransactions,

    #[error("Не удалось извлечь текст из PDF: {0}")]
    Pdf(String),

    #[error("Ошибка чтения файла: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка разбора CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Внутренняя ошибка разбора: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
