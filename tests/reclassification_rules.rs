//! Reclassification of tokenized Python snippets, one rule per case.
//!
//! Each case tokenizes a line of source, runs the full pipeline and checks the category of
//! the first token carrying the given lexeme.

use pyhighlight::highlight::profile::BuiltinRegistry;
use pyhighlight::highlight::testing::{pairs_of, stream_of};
use pyhighlight::highlight::{
    highlight_source, reclassify, LanguageProfile, TokenCategory, TokenStream,
};
use rstest::rstest;
use TokenCategory::*;

fn category_of(stream: &TokenStream, lexeme: &str) -> TokenCategory {
    stream
        .iter()
        .find(|t| t.lexeme() == lexeme)
        .map(|t| t.category())
        .unwrap_or_else(|| panic!("no token '{lexeme}' in stream"))
}

#[rstest]
#[case::function_name("def area(w):\n", "area", FunctionName)]
#[case::class_name("class Shape:\n", "Shape", ClassName)]
#[case::class_with_bases("class Shape(Base):\n", "Shape", ClassName)]
#[case::self_param("def area(self):\n", "self", SelfParam)]
#[case::plain_param("def area(self, w):\n", "w", Parameter)]
#[case::builtin_call("n = len(items)\n", "len", BuiltinFunction)]
#[case::builtin_call_with_space("print (n)\n", "print", BuiltinFunction)]
#[case::builtin_without_call("f = len\n", "len", Identifier)]
#[case::user_call("area(3)\ndef area(w):\n", "area", FunctionCall)]
#[case::unknown_call("draw(3)\n", "draw", Identifier)]
#[case::attribute_access("self.valor = valor\n", "self", Identifier)]
#[case::declaration_on_next_line("def\nname(x):\n", "name", Identifier)]
#[case::decorated_name("@decorator\nclass A:\n", "decorator", Identifier)]
#[case::default_value_callee("def f(x=make(1)):\n", "make", Parameter)]
#[case::default_value_builtin("def f(x=len(y)):\n", "len", BuiltinFunction)]
#[case::nested_default_value("def f(x=(a, b)):\n", "a", Identifier)]
#[case::annotation_is_tagged("def f(x: int):\n", "int", Parameter)]
fn test_python_snippet(
    #[case] source: &str,
    #[case] lexeme: &str,
    #[case] expected: TokenCategory,
) {
    let stream = highlight_source(source, &LanguageProfile::python());
    assert_eq!(category_of(&stream, lexeme), expected, "{source:?}");
}

#[rstest]
#[case::builtin("len", BuiltinFunction)]
#[case::not_in_registry("print", Identifier)]
fn test_custom_builtin_registry(#[case] name: &str, #[case] expected: TokenCategory) {
    let profile = LanguageProfile::python().with_builtins(BuiltinRegistry::new(["len"]));
    let stream = reclassify(
        stream_of(&[(Identifier, name), (Delimiter, "("), (Delimiter, ")")]),
        &profile,
    );
    assert_eq!(stream[0].category(), expected);
}

#[test]
fn test_nested_depth_exclusion() {
    // def f(x, y=(1, z)):
    let input = stream_of(&[
        (Keyword, "def"),
        (Whitespace, " "),
        (Identifier, "f"),
        (Delimiter, "("),
        (Identifier, "x"),
        (Delimiter, ","),
        (Whitespace, " "),
        (Identifier, "y"),
        (Operator, "="),
        (Delimiter, "("),
        (Number, "1"),
        (Delimiter, ","),
        (Whitespace, " "),
        (Identifier, "z"),
        (Delimiter, ")"),
        (Delimiter, ")"),
        (Delimiter, ":"),
    ]);
    let output = reclassify(input, &LanguageProfile::python());
    assert_eq!(output[4].category(), Parameter);
    assert_eq!(output[7].category(), Parameter);
    assert_eq!(output[10].category(), Number);
    assert_eq!(output[13].category(), Identifier);
}

#[test]
fn test_unbalanced_signature_leaves_tail_alone() {
    let input = stream_of(&[
        (Keyword, "def"),
        (Whitespace, " "),
        (Identifier, "f"),
        (Delimiter, "("),
        (Identifier, "a"),
        (Delimiter, ","),
        (Delimiter, "["),
        (Identifier, "b"),
        (Newline, "\n"),
        (Identifier, "c"),
    ]);
    let output = reclassify(input, &LanguageProfile::python());
    assert_eq!(
        pairs_of(&output),
        vec![
            (Keyword, "def"),
            (Whitespace, " "),
            (FunctionName, "f"),
            (Delimiter, "("),
            (Parameter, "a"),
            (Delimiter, ","),
            (Delimiter, "["),
            (Identifier, "b"),
            (Newline, "\n"),
            (Identifier, "c"),
        ]
    );
}

#[test]
fn test_stream_keeps_everything_but_categories() {
    let source = "def f(self):\n    return len(self)\n";
    let raw = pyhighlight::highlight::lexing::tokenize(source);
    let output = reclassify(raw.clone(), &LanguageProfile::python());
    assert_eq!(output.lexemes(), raw.lexemes());
    assert_eq!(output.source_text(), source);
}
