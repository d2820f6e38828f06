//! Record assembly and the parser seam.

use tracing::debug;

use crate::extract::{
    detect_transaction_type, extract_amount, extract_item, extract_payment_method,
    extract_person, extract_quantity,
};
use crate::record::TransactionRecord;

/// Anything that turns a transcript into a [`TransactionRecord`].
///
/// A model-backed parser and [`FallbackParser`] produce the same record
/// shape, so callers can swap one for the other or chain them.
pub trait TranscriptParser: Send + Sync {
    /// Short label reported alongside results, e.g. `"fallback"`.
    fn name(&self) -> &str;

    fn parse(&self, transcript: &str) -> TransactionRecord;
}

/// Deterministic keyword-and-pattern parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackParser;

impl TranscriptParser for FallbackParser {
    fn name(&self) -> &str {
        "fallback"
    }

    fn parse(&self, transcript: &str) -> TransactionRecord {
        parse(transcript)
    }
}

/// Parse one transcript with the built-in rules.
///
/// Total over all strings, including the empty one, and referentially
/// transparent: the same input always yields an equal record.
#[must_use]
pub fn parse(transcript: &str) -> TransactionRecord {
    let record = TransactionRecord::builder(detect_transaction_type(transcript), transcript)
        .item(extract_item(transcript))
        .quantity(extract_quantity(transcript))
        .amount(extract_amount(transcript))
        .method(extract_payment_method(transcript))
        .person(extract_person(transcript))
        .build();

    debug!(transcript, ?record, "fallback parse");
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Currency, PaymentMethod, TransactionType};

    #[test]
    fn test_full_record() {
        let record = parse("Sold 3 bags of rice for 15k cash");

        assert_eq!(record.kind(), TransactionType::Income);
        assert_eq!(record.amount(), Some(15_000));
        assert_eq!(record.item(), Some("rice"));
        assert_eq!(record.quantity(), Some(3));
        assert_eq!(record.method(), Some(PaymentMethod::Cash));
        assert_eq!(record.person(), None);
        assert_eq!(record.currency(), Currency::Ngn);
        assert_eq!(record.date(), None);
        assert_eq!(record.raw(), "Sold 3 bags of rice for 15k cash");
    }

    #[test]
    fn test_raw_is_verbatim() {
        let text = "  Mama Ngozi owes me 12k!! ";
        assert_eq!(parse(text).raw(), text);
    }

    #[test]
    fn test_empty_input() {
        let record = parse("");
        assert_eq!(record.kind(), TransactionType::Expense);
        assert_eq!(record.amount(), None);
        assert_eq!(record.item(), None);
        assert_eq!(record.quantity(), None);
        assert_eq!(record.method(), None);
        assert_eq!(record.person(), None);
        assert_eq!(record.raw(), "");
    }

    #[test]
    fn test_no_cross_field_validation() {
        let record = parse("Paid 000");
        assert_eq!(record.amount(), Some(0));
        assert_eq!(record.item(), None);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let parser: Box<dyn TranscriptParser> = Box::new(FallbackParser);
        assert_eq!(parser.name(), "fallback");
        assert_eq!(parser.parse("Credit customer 15k"), parse("Credit customer 15k"));
    }
}
