mod formatter;

pub use formatter::CurrencyFormat;
