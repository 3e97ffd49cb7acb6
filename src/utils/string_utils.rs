//! # 문자열 유틸리티
//!
//! 뷰 렌더링에서 사용하는 문자열 처리 함수들입니다.

/// HTML 특수 문자를 이스케이프합니다.
///
/// 사용자 입력을 본문이나 속성 값에 넣기 전에 항상 거칩니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 선택적 문자열을 이스케이프합니다. `None`은 빈 문자열입니다.
pub fn escape_optional(value: Option<&str>) -> String {
    value.map(escape_html).unwrap_or_default()
}

/// 가격을 천 단위 구분 기호와 함께 표기합니다.
///
/// 정수 가격은 소수점 없이, 그 외에는 소수점 둘째 자리까지 표기합니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(format_price(1200.0), "1,200");
/// assert_eq!(format_price(99.5), "99.50");
/// ```
pub fn format_price(price: f64) -> String {
    let formatted = if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    };

    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), Some(fraction.to_string())),
        None => (formatted, None),
    };

    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
