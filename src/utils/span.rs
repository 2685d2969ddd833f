use annotate_snippets::{
	display_list::{DisplayList, FormatOptions},
	snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use itertools::Itertools;

use crate::error::Failure;
use crate::parsing::ParseError;

fn find_char_pos(string: &str, byte_pos: usize) -> usize {
	string
		.char_indices()
		.take_while(|(index, _)| *index < byte_pos)
		.count()
}

/// Преобразование ошибки `rust-peg` в формат `snippet`.
pub fn peg_error_to_snippet(err: &ParseError, string: &str, color: bool) -> String {
	let inner_text = format!("expected tokens: {}", err.expected.tokens().join(", "));
	// пробел в конце, чтобы было куда указать, если строка кончилась раньше времени
	let source = format!("{} ", string);
	let start = find_char_pos(string, err.location.offset);

	let snippet = Snippet {
		title: Some(Annotation {
			label: Some("unexpected token"),
			id: None,
			annotation_type: AnnotationType::Error,
		}),
		footer: vec![Annotation {
			label: Some(&inner_text),
			id: None,
			annotation_type: AnnotationType::Note,
		}],
		slices: vec![
			Slice {
				source: &source,
				line_start: 1,
				origin: None,
				fold: true,
				annotations: vec![
					SourceAnnotation {
						label: "unexpected token",
						annotation_type: AnnotationType::Error,
						range: (start, start + 1),
					},
				],
			},
		],
		opt: FormatOptions {
			color,
			..Default::default()
		},
	};
	DisplayList::from(snippet).to_string()
}

/// Заголовок ошибки для неудачного применения правила, само частичное доказательство печатается отдельно.
pub fn failure_to_snippet(failure: &Failure, color: bool) -> String {
	let text = failure.to_string();
	let snippet = Snippet {
		title: Some(Annotation {
			label: Some(&text),
			id: Some(failure.rule.name()),
			annotation_type: AnnotationType::Error,
		}),
		opt: FormatOptions {
			color,
			..Default::default()
		},
		..Snippet::default()
	};
	DisplayList::from(snippet).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn char_positions() {
		assert_eq!(find_char_pos("abc", 0), 0);
		assert_eq!(find_char_pos("abc", 2), 2);
		assert_eq!(find_char_pos("∀x", 3), 1);
		assert_eq!(find_char_pos("ab", 2), 2);
	}

	#[test]
	fn parse_error_mentions_expected_tokens() {
		let input = "a && (b";
		let err = crate::parsing::parse(input).unwrap_err();
		let text = peg_error_to_snippet(&err, input, false);
		assert!(text.contains("unexpected token"));
		assert!(text.contains("expected tokens:"));
		assert!(text.contains("\")\""));
	}
}
