use serde::{Deserialize, Serialize};

// 课堂成员角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MemberRole {
    Student,   // 学生
    Teacher,   // 教师
    CoTeacher, // 协作教师
}

impl MemberRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const CO_TEACHER: &'static str = "co-teacher";

    pub fn teacher_roles() -> &'static [&'static MemberRole] {
        &[&Self::Teacher, &Self::CoTeacher]
    }
    pub fn all_roles() -> &'static [&'static MemberRole] {
        &[&Self::Student, &Self::Teacher, &Self::CoTeacher]
    }

    pub fn is_teacher(&self) -> bool {
        matches!(self, MemberRole::Teacher | MemberRole::CoTeacher)
    }
}

impl<'de> Deserialize<'de> for MemberRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<MemberRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的成员角色: '{s}'. 支持的角色: student, teacher, co-teacher"
            ))
        })
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberRole::Student => write!(f, "{}", MemberRole::STUDENT),
            MemberRole::Teacher => write!(f, "{}", MemberRole::TEACHER),
            MemberRole::CoTeacher => write!(f, "{}", MemberRole::CO_TEACHER),
        }
    }
}

impl std::str::FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MemberRole::STUDENT => Ok(MemberRole::Student),
            MemberRole::TEACHER => Ok(MemberRole::Teacher),
            MemberRole::CO_TEACHER => Ok(MemberRole::CoTeacher),
            _ => Err(format!("Invalid member role: {s}")),
        }
    }
}

// 课堂成员关系
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomMember {
    pub id: i64,
    pub classroom_id: i64,
    pub user_id: i64,
    pub role: MemberRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_strings() {
        for role in MemberRole::all_roles() {
            assert_eq!(role.to_string().parse::<MemberRole>().unwrap(), **role);
        }
    }

    #[test]
    fn test_role_json_uses_kebab_case() {
        let json = serde_json::to_string(&MemberRole::CoTeacher).unwrap();
        assert_eq!(json, "\"co-teacher\"");

        let parsed: MemberRole = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(parsed, MemberRole::Teacher);
        assert!(serde_json::from_str::<MemberRole>("\"admin\"").is_err());
    }

    #[test]
    fn test_teacher_roles() {
        assert!(MemberRole::CoTeacher.is_teacher());
        assert!(!MemberRole::Student.is_teacher());
    }
}
