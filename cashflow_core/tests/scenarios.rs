//! End-to-end behaviour of the fallback parser on realistic transcripts.

use cashflow_core::{PaymentMethod, TransactionRecord, TransactionType, parse};

struct Case {
    input: &'static str,
    kind: TransactionType,
    amount: Option<u64>,
    item: Option<&'static str>,
    quantity: Option<u32>,
    method: Option<PaymentMethod>,
    person: Option<&'static str>,
}

const fn case(input: &'static str, kind: TransactionType) -> Case {
    Case {
        input,
        kind,
        amount: None,
        item: None,
        quantity: None,
        method: None,
        person: None,
    }
}

fn cases() -> Vec<Case> {
    use PaymentMethod::{Cash, Pos, Transfer};
    use TransactionType::{Debt, Expense, Income};

    vec![
        Case {
            amount: Some(15_000),
            item: Some("rice"),
            quantity: Some(3),
            method: Some(Cash),
            ..case("Sold 3 bags of rice for 15k cash", Income)
        },
        Case {
            amount: Some(12_000),
            person: Some("Mama Ngozi"),
            ..case("Mama Ngozi owes me 12k", Debt)
        },
        Case {
            amount: Some(10_000),
            item: Some("stock for"),
            person: Some("Iya Biliki"),
            ..case("I buy stock for 10,000 from Iya Biliki", Expense)
        },
        Case {
            amount: Some(2_000),
            ..case("Took 2k as change", Expense)
        },
        Case {
            item: Some("goods"),
            ..case("Customer collect goods on credit", Debt)
        },
        Case {
            amount: Some(50_000),
            method: Some(Pos),
            person: Some("Chief Ade"),
            ..case("Chief Ade paid 50k via POS", Expense)
        },
        Case {
            amount: Some(5_000),
            item: Some("garri"),
            ..case("Bought garri 5,000 naira", Expense)
        },
        Case {
            amount: Some(20_000),
            person: Some("Oga Chidi"),
            ..case("Oga Chidi borrow me 20k", Debt)
        },
        Case {
            amount: Some(30_000),
            method: Some(Transfer),
            person: Some("Oga Chidi"),
            ..case("Oga Chidi paid 30k via transfer", Expense)
        },
        Case {
            amount: Some(18_000),
            item: Some("beans"),
            quantity: Some(2),
            person: Some("Mrs Adeyemi"),
            ..case("Mrs Adeyemi buy 2 bags of beans 18k", Expense)
        },
        Case {
            amount: Some(200),
            ..case("Give boy 200 naira for errand", Expense)
        },
        Case {
            amount: Some(5_000),
            ..case("I chop 5k for lunch", Expense)
        },
        Case {
            amount: Some(100_000),
            method: Some(Pos),
            ..case("Receive payment 100k via POS", Income)
        },
        case("Hello there", Expense),
        case("42", Expense),
    ]
}

fn check(case: &Case, record: &TransactionRecord) {
    let input = case.input;
    assert_eq!(record.kind(), case.kind, "type for {input:?}");
    assert_eq!(record.amount(), case.amount, "amount for {input:?}");
    assert_eq!(record.item(), case.item, "item for {input:?}");
    assert_eq!(record.quantity(), case.quantity, "quantity for {input:?}");
    assert_eq!(record.method(), case.method, "method for {input:?}");
    assert_eq!(record.person(), case.person, "person for {input:?}");
    assert_eq!(record.date(), None, "date for {input:?}");
    assert_eq!(record.raw(), input);
}

#[test]
fn test_scenarios() {
    for case in cases() {
        check(&case, &parse(case.input));
    }
}

#[test]
fn test_amount_priority_k_over_grouped() {
    assert_eq!(parse("15k or 15,000").amount(), Some(15_000));
    assert_eq!(parse("paid 10,000 or 12k").amount(), Some(12_000));
}

#[test]
fn test_deterministic() {
    for case in cases() {
        assert_eq!(parse(case.input), parse(case.input));
    }
}

#[test]
fn test_total_over_odd_input() {
    let long_k = "k".repeat(10_000);
    let long_digits = "9".repeat(500);
    let inputs = [
        "",
        "   ",
        "\n\t",
        "k",
        ",,,",
        "1,2,3",
        "₦5,000 ọjà",
        "Ẹ jọ̀ọ́ san owó",
        long_k.as_str(),
        long_digits.as_str(),
    ];
    for input in inputs {
        let record = parse(input);
        assert!(matches!(
            record.kind(),
            TransactionType::Income | TransactionType::Expense | TransactionType::Debt
        ));
        assert_eq!(record.raw(), input);
    }
}

#[test]
fn test_parallel_callers_agree() {
    let expected: Vec<_> = cases().iter().map(|c| parse(c.input)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| cases().iter().map(|c| parse(c.input)).collect::<Vec<_>>()))
        .collect();

    for handle in handles {
        let records = handle.join().unwrap_or_else(|_| panic!("parser thread panicked"));
        assert_eq!(records, expected);
    }
}

#[test]
fn test_record_json_shape() {
    let json = serde_json::to_value(parse("Sold 3 bags of rice for 15k cash"))
        .unwrap_or_else(|e| panic!("record should serialize: {e}"));

    assert_eq!(
        json,
        serde_json::json!({
            "type": "income",
            "item": "rice",
            "quantity": 3,
            "amount": 15000,
            "currency": "NGN",
            "method": "cash",
            "person": null,
            "date": null,
            "raw": "Sold 3 bags of rice for 15k cash"
        })
    );
}
