use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    OktaGroup,
    AppGroup,
    BuiltIn,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupProfile {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An Okta group. `id` stays empty until Okta assigns one on create.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_membership_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_class: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub group_type: Option<GroupType>,
    pub profile: GroupProfile,
}

impl Group {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            profile: GroupProfile {
                name: name.into(),
                description,
            },
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Staged,
    Provisioned,
    Active,
    Recovery,
    LockedOut,
    PasswordExpired,
    Suspended,
    Deprovisioned,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Okta user profile, without credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl UserProfile {
    /// Case-insensitive match on the primary email, folding each character
    /// to lowercase rather than applying full Unicode case folding.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|own| fold_eq(own, email))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: String,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_changed: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_changed: Option<DateTime<Utc>>,
    pub profile: UserProfile,
}

pub(crate) fn contains_email(users: &[User], email: &str) -> bool {
    users.iter().any(|user| user.profile.has_email(email))
}

/// Compares character by character; a pair matches when identical or when
/// both map to the same single character under lowercase or uppercase.
fn fold_eq(left: &str, right: &str) -> bool {
    let mut left = left.chars();
    let mut right = right.chars();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if char_fold_eq(a, b) => {}
            _ => return false,
        }
    }
}

fn char_fold_eq(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let lower = single(a.to_lowercase()).zip(single(b.to_lowercase()));
    let upper = single(a.to_uppercase()).zip(single(b.to_uppercase()));
    lower.is_some_and(|(a, b)| a == b) || upper.is_some_and(|(a, b)| a == b)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_group_omits_unset_fields() {
        let group = Group::new("Engineering", None);
        let value = serde_json::to_value(&group).expect("serialize");
        assert_eq!(value, json!({ "profile": { "name": "Engineering" } }));
    }

    #[test]
    fn group_decodes_okta_payload() {
        let group: Group = serde_json::from_value(json!({
            "id": "00g1emaKYZTWRYYRRTSK",
            "created": "2015-02-06T10:11:28.000Z",
            "lastUpdated": "2015-10-05T19:16:43.000Z",
            "lastMembershipUpdated": "2015-11-28T19:15:32.000Z",
            "objectClass": ["okta:user_group"],
            "type": "OKTA_GROUP",
            "profile": {
                "name": "West Coast Users",
                "description": "All Users West of The Rockies"
            },
            "_links": {}
        }))
        .expect("decode");

        assert_eq!(group.id, "00g1emaKYZTWRYYRRTSK");
        assert_eq!(group.group_type, Some(GroupType::OktaGroup));
        assert_eq!(group.object_class, vec!["okta:user_group".to_string()]);
        assert!(group.last_membership_updated.is_some());
        assert_eq!(
            group.profile.description.as_deref(),
            Some("All Users West of The Rockies")
        );

        let round = serde_json::to_value(&group).expect("serialize");
        assert_eq!(round["lastMembershipUpdated"], "2015-11-28T19:15:32Z");
        assert!(round.get("_links").is_none());
    }

    #[test]
    fn unknown_enum_values_still_decode() {
        let group: Group =
            serde_json::from_value(json!({ "type": "SOMETHING_NEW", "profile": {} }))
                .expect("decode");
        assert_eq!(group.group_type, Some(GroupType::Unknown));

        let user: User =
            serde_json::from_value(json!({ "id": "u1", "status": "ON_HOLD" })).expect("decode");
        assert_eq!(user.status, UserStatus::Unknown);
    }

    #[test]
    fn user_decodes_profile() {
        let user: User = serde_json::from_value(json!({
            "id": "00ub0oNGTSWTBKOLGLNR",
            "status": "LOCKED_OUT",
            "lastLogin": null,
            "profile": {
                "firstName": "Isaac",
                "lastName": "Brock",
                "email": "isaac.brock@example.com",
                "zipCode": "94107"
            }
        }))
        .expect("decode");

        assert_eq!(user.status, UserStatus::LockedOut);
        assert!(user.last_login.is_none());
        assert_eq!(user.profile.zip_code.as_deref(), Some("94107"));
        assert_eq!(user.profile.first_name.as_deref(), Some("Isaac"));
    }

    #[test]
    fn email_match_ignores_case() {
        let profile = UserProfile {
            email: Some("Dr.Dre@Example.com".to_string()),
            ..UserProfile::default()
        };
        assert!(profile.has_email("dr.dre@example.com"));
        assert!(profile.has_email("DR.DRE@EXAMPLE.COM"));
        assert!(!profile.has_email("dr.dre@example.org"));
        assert!(!UserProfile::default().has_email(""));
    }

    #[test]
    fn email_match_folds_one_character_at_a_time() {
        let long_s = UserProfile {
            email: Some("\u{17F}am@example.com".to_string()),
            ..UserProfile::default()
        };
        assert!(long_s.has_email("sam@example.com"));
        assert!(long_s.has_email("SAM@example.com"));

        let dotted_capital_i = UserProfile {
            email: Some("\u{130}an@example.com".to_string()),
            ..UserProfile::default()
        };
        assert!(!dotted_capital_i.has_email("i\u{307}an@example.com"));
        assert!(dotted_capital_i.has_email("\u{130}AN@example.com"));

        let kelvin = UserProfile {
            email: Some("\u{212A}im@example.com".to_string()),
            ..UserProfile::default()
        };
        assert!(kelvin.has_email("kim@example.com"));
        assert!(!kelvin.has_email("kim@example.co"));
    }

    #[test]
    fn contains_email_scans_every_user() {
        let users = vec![
            User::default(),
            User {
                id: "u2".to_string(),
                profile: UserProfile {
                    email: Some("Jim.Halpert@Mailinator.com".to_string()),
                    ..UserProfile::default()
                },
                ..User::default()
            },
        ];
        assert!(contains_email(&users, "jim.halpert@mailinator.com"));
        assert!(!contains_email(&users, "nonexistant"));
        assert!(!contains_email(&[], "jim.halpert@mailinator.com"));
    }
}
