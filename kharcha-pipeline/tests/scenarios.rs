use kharcha_core::{Category, EXAMPLE_PHRASES};
use kharcha_pipeline::{ExpenseParser, ParseFailure};

fn parser() -> ExpenseParser {
    ExpenseParser::new().expect("parser should build")
}

#[test]
fn test_hindi_food_phrase() {
    let record = parser().parse("Maine 500 rupees khana pe kharch kiye").unwrap();
    assert_eq!(record.amount, 500.0);
    assert_eq!(record.category, Category::Food);
    assert!(!record.description.is_empty());
}

#[test]
fn test_transport_phrase() {
    let record = parser().parse("Transport mein 200 rupees gaye").unwrap();
    assert_eq!(record.amount, 200.0);
    assert_eq!(record.category, Category::Transport);
    assert_eq!(record.description, "Transport");
}

#[test]
fn test_food_keyword_without_action() {
    assert_eq!(parser().parse("I like pizza"), Err(ParseFailure::NoActionDetected));
}

#[test]
fn test_action_without_amount() {
    assert_eq!(parser().parse("spent on food"), Err(ParseFailure::NoAmountFound));
}

#[test]
fn test_empty_input() {
    assert_eq!(parser().parse(""), Err(ParseFailure::EmptyInput));
}

#[test]
fn test_currency_marked_amount_wins() {
    let record = parser().parse("bought 2 kurta for rs 1800").unwrap();
    assert_eq!(record.amount, 1800.0);
    assert_eq!(record.category, Category::Shopping);
}

#[test]
fn test_example_phrases() {
    let p = parser();
    let expected: [(f64, Category); 8] = [
        (500.0, Category::Food),
        (200.0, Category::Transport),
        (1500.0, Category::Shopping),
        (800.0, Category::Bills),
        (0.0, Category::Other),
        (300.0, Category::Transport),
        (1200.0, Category::Bills),
        (800.0, Category::Entertainment),
    ];

    for (phrase, (amount, category)) in EXAMPLE_PHRASES.iter().zip(expected) {
        match p.parse(phrase) {
            Ok(record) => {
                assert_eq!(record.amount, amount, "{phrase}");
                assert_eq!(record.category, category, "{phrase}");
            }
            Err(e) => {
                // "bharwaye" is not an action word
                assert_eq!(*phrase, "Petrol mein 2000 rupees bharwaye");
                assert_eq!(e, ParseFailure::NoActionDetected);
            }
        }
    }
}

#[test]
fn test_parser_shared_across_threads() {
    let owned = parser();
    let p = &owned;
    std::thread::scope(|s| {
        let handles: Vec<_> = EXAMPLE_PHRASES
            .iter()
            .map(|phrase| s.spawn(move || p.parse(phrase)))
            .collect();
        for (h, phrase) in handles.into_iter().zip(EXAMPLE_PHRASES) {
            assert_eq!(h.join().unwrap(), p.parse(phrase));
        }
    });
}

#[test]
fn test_parsed_record_json() {
    let record = parser().parse("Maine 500 rupees khana pe kharch kiye").unwrap();
    let v = serde_json::to_value(&record).unwrap();
    assert_eq!(
        v,
        serde_json::json!({"amount": 500.0, "category": "food", "description": "khana pe"})
    );

    let back: kharcha_core::ExpenseRecord = serde_json::from_value(v).unwrap();
    assert_eq!(back, record);
}
