//! 폼 필드 공용 검증 함수
//!
//! 에러 메시지는 필드 이름 뒤에 이어 붙는 서술부로 작성합니다.
//! (`title` + `is required` → "title is required")

use validator::{ValidateUrl, ValidationError};

/// 공백만 있는 값도 누락으로 처리합니다.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message("is required".into()));
    }
    Ok(())
}

/// 비어 있으면 통과, 값이 있으면 URL 형식이어야 합니다.
pub fn optional_url(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if !value.is_empty() && !value.validate_url() {
        return Err(ValidationError::new("url")
            .with_message("must be a valid URL".into()));
    }
    Ok(())
}

/// 0 이상의 유한한 숫자
pub fn non_negative_number(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(()),
        Ok(number) if number.is_finite() => Err(ValidationError::new("range")
            .with_message("must be greater than or equal to 0".into())),
        _ => Err(ValidationError::new("number")
            .with_message("must be a number".into())),
    }
}

/// 1 이상 5 이하의 정수
pub fn rating_in_range(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;

    match value.trim().parse::<i64>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(()),
        _ => Err(ValidationError::new("range")
            .with_message("must be an integer between 1 and 5".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("Tokyo").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank("  \t").is_err());
    }

    #[test]
    fn test_optional_url() {
        assert!(optional_url("").is_ok());
        assert!(optional_url("https://images.example.com/a.jpg").is_ok());
        assert!(optional_url("not a url").is_err());
    }

    #[test]
    fn test_non_negative_number() {
        assert!(non_negative_number("0").is_ok());
        assert!(non_negative_number(" 1500.50 ").is_ok());

        let negative = non_negative_number("-1").unwrap_err();
        assert_eq!(negative.code, "range");

        let not_number = non_negative_number("cheap").unwrap_err();
        assert_eq!(not_number.code, "number");

        assert!(non_negative_number("NaN").is_err());
        assert_eq!(non_negative_number("").unwrap_err().code, "required");
    }

    #[test]
    fn test_rating_in_range() {
        for rating in ["1", "3", "5"] {
            assert!(rating_in_range(rating).is_ok());
        }
        for rating in ["0", "6", "4.5", "five"] {
            assert!(rating_in_range(rating).is_err(), "{} should be rejected", rating);
        }
    }
}
