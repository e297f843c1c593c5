use crate::android::aapt2::collect_in_section;

const SIMPLEST: &[&str] = &[
    "brabrabra",
    "  resource <address> mipmap/block1",
    "    (mdpi-v4) (file) res/x0.png type=PNG",
    "    (hdpi-v4) (file) res/x1.png type=PNG",
    "    (xhdpi-v4) (file) res/x2.png type=PNG",
    "    (xxhdpi-v4) (file) res/x3.png type=PNG",
    "  resource <address> mipmap/block2",
];

const LAST_SEGMENT: &[&str] = &[
    "brabrabra",
    "  resource <address> mipmap/block1",
    "    (mdpi-v4) (file) res/x0.png type=PNG",
    "    (hdpi-v4) (file) res/x1.png type=PNG",
    "    (xhdpi-v4) (file) res/x2.png type=PNG",
    "    (xxhdpi-v4) (file) res/x3.png type=PNG",
];

const ODD: &[&str] = &[
    "brabrabra",
    "  resource <address> mipmap/block1",
    "    (mdpi-v4) (file) res/x0.png type=PNG",
    "    (hdpi-v4) (file) res/x1.png type=PNG",
    "    (xhdpi-v4) (file) res/x2.png type=PNG",
];

const X0: (&str, &str) = ("mdpi-v4", "res/x0.png");
const X1: (&str, &str) = ("hdpi-v4", "res/x1.png");
const X2: (&str, &str) = ("xhdpi-v4", "res/x2.png");
const X3: (&str, &str) = ("xxhdpi-v4", "res/x3.png");

const CASES: &[(&str, &[&str], usize, &[(&str, &str)])] = &[
    ("simplest/first", SIMPLEST, 2, &[X0, X1, X2, X3]),
    ("simplest/middle", SIMPLEST, 3, &[X1, X0, X2, X3]),
    ("simplest/last", SIMPLEST, 5, &[X3, X2, X1, X0]),
    ("last_segment/first", LAST_SEGMENT, 2, &[X0, X1, X2, X3]),
    ("last_segment/middle", LAST_SEGMENT, 3, &[X1, X0, X2, X3]),
    ("last_segment/last", LAST_SEGMENT, 5, &[X3, X2, X1, X0]),
    ("odd/first", ODD, 2, &[X0, X1, X2]),
    ("odd/middle", ODD, 3, &[X1, X0, X2]),
    ("odd/last", ODD, 4, &[X2, X1, X0]),
];

fn collect(lines: &[&str], pivot_index: usize) -> Vec<(String, String)> {
    let mut yielded = vec![];
    collect_in_section(lines, pivot_index, |config, path| {
        yielded.push((config.to_string(), path.to_string()))
    });
    yielded
}

#[test]
fn emission_order_around_the_pivot() {
    for (name, lines, pivot_index, expected) in CASES {
        let yielded = collect(lines, *pivot_index);
        let expected: Vec<(String, String)> = expected
            .iter()
            .map(|(config, path)| (config.to_string(), path.to_string()))
            .collect();
        assert_eq!(yielded, expected, "{name}");
    }
}

#[test]
fn empty_qualifier_is_reported_as_default() {
    let lines = [
        "brabrabra",
        "  resource <address> mipmap/block1",
        "    () (file) res/x0.png type=PNG",
    ];
    assert_eq!(
        collect(&lines, 2),
        vec![("(default)".to_string(), "res/x0.png".to_string())]
    );
}

#[test]
fn line_below_the_pivot_is_taken_whatever_its_indentation() {
    let lines = [
        "  resource <address> mipmap/block1",
        "    (mdpi-v4) (file) res/x0.png type=PNG",
        "    (hdpi-v4) (file) res/x1.png type=PNG",
        "      (xhdpi-v4) (file) res/x2.png type=PNG",
        "    (xxhdpi-v4) (file) res/x3.png type=PNG",
    ];
    assert_eq!(
        collect(&lines, 2),
        vec![
            ("hdpi-v4".to_string(), "res/x1.png".to_string()),
            ("mdpi-v4".to_string(), "res/x0.png".to_string()),
            ("xhdpi-v4".to_string(), "res/x2.png".to_string()),
            ("xxhdpi-v4".to_string(), "res/x3.png".to_string()),
        ]
    );
}

#[test]
fn deeper_lines_further_down_end_the_block() {
    let lines = [
        "  resource <address> mipmap/block1",
        "    (mdpi-v4) (file) res/x0.png type=PNG",
        "    (hdpi-v4) (file) res/x1.png type=PNG",
        "    (xhdpi-v4) (file) res/x2.png type=PNG",
        "      (xxhdpi-v4) (file) res/x3.png type=PNG",
    ];
    assert_eq!(
        collect(&lines, 2),
        vec![
            ("hdpi-v4".to_string(), "res/x1.png".to_string()),
            ("mdpi-v4".to_string(), "res/x0.png".to_string()),
            ("xhdpi-v4".to_string(), "res/x2.png".to_string()),
        ]
    );
}

#[test]
fn walk_stops_at_the_first_line_of_the_dump() {
    let lines = [
        "    (mdpi-v4) (file) res/x0.png type=PNG",
        "    (hdpi-v4) (file) res/x1.png type=PNG",
        "    (xhdpi-v4) (file) res/x2.png type=PNG",
    ];
    assert_eq!(
        collect(&lines, 1),
        vec![
            ("hdpi-v4".to_string(), "res/x1.png".to_string()),
            ("mdpi-v4".to_string(), "res/x0.png".to_string()),
        ]
    );
}

#[test]
fn only_ascii_whitespace_counts_as_indentation() {
    let lines = [
        "  resource <address> mipmap/block1",
        "    (mdpi-v4) (file) res/x0.png type=PNG",
        "    (hdpi-v4) (file) res/x1.png type=PNG",
        "    (xhdpi-v4) (file) res/x2.png type=PNG",
        "\u{3000} (xxhdpi-v4) (file) res/x3.png type=PNG",
    ];
    assert_eq!(
        collect(&lines, 2),
        vec![
            ("hdpi-v4".to_string(), "res/x1.png".to_string()),
            ("mdpi-v4".to_string(), "res/x0.png".to_string()),
            ("xhdpi-v4".to_string(), "res/x2.png".to_string()),
        ]
    );
}
