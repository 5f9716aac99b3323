// File: crates/ticks-core/tests/options.rs
// Purpose: Ticker option defaults, validation, JSON loading and error messages.

use ticks_core::types::{DEFAULT_X_PIXELS_PER_LABEL, DEFAULT_Y_PIXELS_PER_LABEL};
use ticks_core::{AxisLabelFormatter, LabelInput, TickError, TickerOptions};

#[test]
fn presets() {
    let x = TickerOptions::x_axis();
    let y = TickerOptions::y_axis();
    assert_eq!(x.pixels_per_label, DEFAULT_X_PIXELS_PER_LABEL);
    assert_eq!(y.pixels_per_label, DEFAULT_Y_PIXELS_PER_LABEL);
    assert!(!x.logscale && !x.labels_kmb && !x.labels_kmg2 && !x.labels_utc);
    assert_eq!((x.digits_after_decimal, x.max_number_width, x.sig_figs), (2, 6, None));
    assert!(matches!(x.axis_label_formatter, AxisLabelFormatter::Default));
}

#[test]
fn validation() {
    assert!(TickerOptions::default().validate().is_ok());
    assert_eq!(
        TickerOptions::default().with_pixels_per_label(0.0).validate(),
        Err(TickError::InvalidPixelsPerLabel(0.0))
    );
    assert!(TickerOptions::default().with_pixels_per_label(f64::NAN).validate().is_err());
    assert_eq!(
        TickerOptions::default().with_sig_figs(Some(0)).validate(),
        Err(TickError::InvalidSigFigs(0))
    );
    assert_eq!(
        TickerOptions::default().with_sig_figs(Some(22)).validate(),
        Err(TickError::InvalidSigFigs(22))
    );
    assert!(TickerOptions::default().with_sig_figs(Some(21)).validate().is_ok());
}

#[test]
fn error_messages() {
    assert_eq!(
        TickError::InvalidPixelsPerLabel(-1.0).to_string(),
        "pixels per label must be finite and positive, got -1"
    );
    assert_eq!(TickError::UnknownGranularity("x".into()).to_string(), "unknown granularity: x");
}

#[test]
fn loads_from_json() {
    let json = r#"{ "pixels_per_label": 50, "logscale": true, "labelsKMG2": true, "sig_figs": 4 }"#;
    let o: TickerOptions = serde_json::from_str(json).unwrap();
    assert_eq!(o.pixels_per_label, 50.0);
    assert!(o.logscale && o.labels_kmg2);
    assert!(!o.labels_utc);
    assert_eq!(o.sig_figs, Some(4));
    assert_eq!(o.digits_after_decimal, 2);

    let empty: TickerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.pixels_per_label, DEFAULT_X_PIXELS_PER_LABEL);

    let out = serde_json::to_value(&o).unwrap();
    assert_eq!(out["labels_kmg2"], serde_json::json!(true));
    assert!(out.get("axis_label_formatter").is_none());
}

#[test]
fn loads_chart_option_names() {
    let json = r#"{ "pixelsPerLabel": 40, "labelsUTC": true, "digitsAfterDecimal": 4,
                    "maxNumberWidth": 8, "sigFigs": 3, "labelsKMB": true }"#;
    let o: TickerOptions = serde_json::from_str(json).unwrap();
    assert_eq!(o.pixels_per_label, 40.0);
    assert!(o.labels_utc && o.labels_kmb);
    assert_eq!((o.digits_after_decimal, o.max_number_width, o.sig_figs), (4, 8, Some(3)));
}

#[test]
fn rejects_unknown_option_names() {
    let err = serde_json::from_str::<TickerOptions>(r#"{ "pixelsPerLabl": 40 }"#).unwrap_err();
    assert!(err.to_string().contains("pixelsPerLabl"), "{err}");
    assert!(serde_json::from_str::<TickerOptions>(r#"{ "axis_label_formatter": null }"#).is_err());
}

#[test]
fn formatter_dispatch() {
    let o = TickerOptions::y_axis();
    assert_eq!(o.format_label(&LabelInput::Number(20.0), &()), "20");

    let custom = o.clone().with_formatter(AxisLabelFormatter::custom(|input, opts, _| match input {
        LabelInput::Number(v) => format!("{v}@{}", opts.pixels_per_label),
        LabelInput::Date { millis, .. } => millis.to_string(),
    }));
    assert_eq!(custom.format_label(&LabelInput::Number(2.0), &()), "2@30");
    assert_eq!(format!("{:?}", custom.axis_label_formatter), "Custom(..)");
}
