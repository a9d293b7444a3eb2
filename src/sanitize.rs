//! Code-fence stripping for generated text.

const FENCE: &str = "```";

/// Strip one leading fence opener (with or without a language tag), one
/// trailing fence closer, and the surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    let mut body = text.trim();

    if let Some(rest) = body.strip_prefix(FENCE) {
        // The opener's line is dropped only when it holds nothing but a tag
        let (first_line, remainder) = rest.split_once('\n').unwrap_or((rest, ""));
        body = if is_language_tag(first_line.trim()) {
            remainder
        } else {
            rest
        };
    }

    let body = body.trim_end();
    let body = body.strip_suffix(FENCE).unwrap_or(body);

    body.trim().to_string()
}

fn is_language_tag(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tagged_fence() {
        assert_eq!(strip_code_fences("```lua\nX\n```"), "X");
        assert_eq!(strip_code_fences("```LUA\nprint(1)\n```\n"), "print(1)");
        assert_eq!(strip_code_fences("```luau\nlocal a = 1\n```"), "local a = 1");
    }

    #[test]
    fn test_strips_bare_fence() {
        assert_eq!(strip_code_fences("```\nlocal a = 1\n```"), "local a = 1");
        assert_eq!(strip_code_fences("  ```\n[1, 2]```  "), "[1, 2]");
    }

    #[test]
    fn test_unfenced_text_is_unchanged() {
        let code = "local Players = game:GetService(\"Players\")\nprint(Players)";
        assert_eq!(strip_code_fences(code), code);
        assert_eq!(strip_code_fences(&format!("\n  {}  \n", code)), code);

        let once = strip_code_fences("```lua\nprint('a')\n```");
        assert_eq!(strip_code_fences(&once), once);
    }

    #[test]
    fn test_only_outer_fences_are_removed() {
        let text = "```lua\nlocal s = [[```]]\n```";
        assert_eq!(strip_code_fences(text), "local s = [[```]]");
    }

    #[test]
    fn test_code_on_the_opener_line_is_kept() {
        assert_eq!(strip_code_fences("```print('hi')```"), "print('hi')");
        assert_eq!(strip_code_fences("```local a = 1\n```"), "local a = 1");
        assert_eq!(strip_code_fences("```lua  \nprint(1)\n```"), "print(1)");
    }

    #[test]
    fn test_fence_only_input_is_empty() {
        assert_eq!(strip_code_fences("```"), "");
        assert_eq!(strip_code_fences("```lua\n```"), "");
        assert_eq!(strip_code_fences("```lua"), "");
        assert_eq!(strip_code_fences("   "), "");
    }
}
