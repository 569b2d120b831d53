use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

static HHMM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("Invalid time regex"));

const COMMON_PASSWORDS: [&str; 9] = [
    "password",
    "12345678",
    "123456789",
    "qwerty123",
    "admin123",
    "password1",
    "letmein1",
    "welcome1",
    "abcd1234",
];

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 显示名称：去除首尾空白后 1..=64 个字符
pub fn validate_display_name(name: &str) -> Result<(), &'static str> {
    let count = name.trim().chars().count();
    if count == 0 {
        return Err("Name must not be empty");
    }
    if count > 64 {
        return Err("Name must be at most 64 characters long");
    }
    Ok(())
}

/// 密码策略：至少 8 位，包含大写、小写字母与数字，且不是常见弱密码
pub fn validate_password(password: &str) -> Result<(), String> {
    let checks: [(bool, &str); 4] = [
        (
            password.chars().count() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
    ];

    let mut errors: Vec<&str> = checks
        .iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, msg)| *msg)
        .collect();

    if COMMON_PASSWORDS
        .iter()
        .any(|weak| password.eq_ignore_ascii_case(weak))
    {
        errors.push("Password is too common, please choose a stronger password");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("; "))
    }
}

/// 解析 `HH:MM` 格式的时间
pub fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if !HHMM_RE.is_match(value) {
        return None;
    }
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// 校验时间段：两端均为 `HH:MM` 且开始早于结束
pub fn validate_time_range(start: &str, end: &str) -> Result<(), String> {
    let start_time =
        parse_hhmm(start).ok_or_else(|| format!("Invalid start time '{start}', expected HH:MM"))?;
    let end_time =
        parse_hhmm(end).ok_or_else(|| format!("Invalid end time '{end}', expected HH:MM"))?;
    if start_time >= end_time {
        return Err(format!("Start time {start} must be earlier than end time {end}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email(" Ada.Lovelace+cs@uni.edu ").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn test_display_name() {
        assert!(validate_display_name("Ada").is_ok());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecurePass123").is_ok());
        assert!(validate_password("MyP@ssw0rd").is_ok());
    }

    #[test]
    fn test_password_reports_every_violation() {
        let err = validate_password("abc").unwrap_err();
        assert!(err.contains("at least 8 characters"));
        assert!(err.contains("uppercase"));
        assert!(err.contains("digit"));
        assert!(!err.contains("lowercase"));
    }

    #[test]
    fn test_common_password() {
        let err = validate_password("Password1").unwrap_err();
        assert!(err.contains("too common"));
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(
            parse_hhmm("10:00"),
            NaiveTime::from_hms_opt(10, 0, 0)
        );
        assert_eq!(parse_hhmm("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert!(parse_hhmm("9:00").is_none());
        assert!(parse_hhmm("24:00").is_none());
        assert!(parse_hhmm("10:60").is_none());
        assert!(parse_hhmm("10:00:00").is_none());
    }

    #[test]
    fn test_time_range() {
        assert!(validate_time_range("10:00", "11:00").is_ok());
        assert!(validate_time_range("11:00", "11:00").is_err());
        assert!(validate_time_range("1100", "12:00").is_err());
    }
}
