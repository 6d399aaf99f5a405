pub mod font_utils;
pub mod io_utils;
pub mod logger_utils;
pub mod pdf_utils;
pub mod tick_utils;
