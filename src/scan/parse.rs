use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take},
    combinator::recognize,
    multi::many0_count,
    sequence::{delimited, preceded},
    IResult,
};

// a backslash swallows whatever byte follows it, quotes included
fn escaped_pair(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(preceded(tag(&b"\\"[..]), take(1usize)))(input)
}

fn unescaped_run(input: &[u8]) -> IResult<&[u8], &[u8]> {
    is_not(&b"\"\\"[..])(input)
}

fn segment_body(input: &[u8]) -> IResult<&[u8], &[u8]> {
    recognize(many0_count(alt((unescaped_run, escaped_pair))))(input)
}

/// Parses one double-quoted segment at the start of `input`, returning the
/// bytes between the delimiters.
pub fn quoted_segment(input: &[u8]) -> IResult<&[u8], &[u8]> {
    delimited(tag(&b"\""[..]), segment_body, tag(&b"\""[..]))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_segment() {
        let (rest, body) = quoted_segment(b"\"abc\" tail").unwrap();
        assert_eq!(body, b"abc");
        assert_eq!(rest, b" tail");
    }

    #[test]
    fn test_empty_segment() {
        let (rest, body) = quoted_segment(b"\"\"").unwrap();
        assert!(body.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let (rest, body) = quoted_segment(b"\"a\\\"b\"c").unwrap();
        assert_eq!(body, b"a\\\"b");
        assert_eq!(rest, b"c");
    }

    #[test]
    fn test_escaped_backslash_then_close() {
        let (rest, body) = quoted_segment(b"\"a\\\\\"x").unwrap();
        assert_eq!(body, b"a\\\\");
        assert_eq!(rest, b"x");
    }

    #[test]
    fn test_unterminated() {
        assert!(quoted_segment(b"\"abc").is_err());
        // the escape eats the only closing quote
        assert!(quoted_segment(b"\"abc\\\"").is_err());
        assert!(quoted_segment(b"abc\"").is_err());
    }

    #[test]
    fn test_high_bytes_inside() {
        let (_, body) = quoted_segment(&[b'"', 0x88, 0x95, b'\\', 0xf3, b'"']).unwrap();
        assert_eq!(body, &[0x88u8, 0x95, b'\\', 0xf3][..]);
    }
}
