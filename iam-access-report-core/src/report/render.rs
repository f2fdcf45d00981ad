//! Plain-text renderers for the report's record blocks.
//!
//! Output is stable, line-oriented, and diffable: two-space indented fields
//! under unindented block labels.

use std::io::Write;

use crate::error::{ReportError, ReportResult};
use crate::types::{AccessGroup, Policy};

/// Separator printed above every access group block.
const GROUP_SEPARATOR: &str = "=================================";

/// Print one access group block: a separator, the label, then the group's
/// id, name, and description.
pub fn render_group<W: Write>(out: &mut W, group: &AccessGroup) -> ReportResult<()> {
    writeln!(out, "{GROUP_SEPARATOR}")?;
    writeln!(out, "Access Group:")?;
    writeln!(out, "  id: {}", group.id)?;
    writeln!(out, "  name: {}", group.name)?;
    writeln!(out, "  description: {}", group.description)?;
    Ok(())
}

/// Print one policy block: the first attribute of the first subject, every
/// role, and the attributes of the first resource entry.
///
/// Only the first subject and the first resource entry are shown even when a
/// policy carries several; widening that view is a behavior change, not a
/// cleanup. A policy with no subjects, a subject with no attributes, or a
/// policy with no resource entries fails with a structural error at the point
/// of access, and the lines already written stay written.
pub fn render_policy<W: Write>(out: &mut W, policy: &Policy) -> ReportResult<()> {
    writeln!(out, "Policy:")?;
    let subject = policy
        .subjects
        .first()
        .ok_or_else(|| ReportError::structural("a policy with at least one subject"))?;
    let attribute = subject
        .attributes
        .first()
        .ok_or_else(|| ReportError::structural("a subject with at least one attribute"))?;
    writeln!(out, "  Subject: {} / {}", attribute.name, attribute.value)?;

    writeln!(out, "  Roles:")?;
    for role in &policy.roles {
        writeln!(out, "    {}", role.display_name)?;
    }

    writeln!(out, "  Resources:")?;
    let resource = policy
        .resources
        .first()
        .ok_or_else(|| ReportError::structural("a policy with at least one resource entry"))?;
    for attribute in &resource.attributes {
        writeln!(out, "  {}: {}", attribute.name, attribute.value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attribute, ResourceSpec, Role, Subject};

    fn attribute(name: &str, value: &str) -> Attribute {
        Attribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn sample_policy() -> Policy {
        Policy {
            subjects: vec![Subject {
                attributes: vec![
                    attribute("iam_id", "IBMid-001"),
                    attribute("scope", "account"),
                ],
            }],
            roles: vec![
                Role {
                    display_name: "Viewer".to_string(),
                },
                Role {
                    display_name: "Operator".to_string(),
                },
            ],
            resources: vec![
                ResourceSpec {
                    attributes: vec![
                        attribute("accountId", "acc-1"),
                        attribute("serviceName", "cloud-object-storage"),
                    ],
                },
                ResourceSpec {
                    attributes: vec![attribute("accountId", "acc-2")],
                },
            ],
        }
    }

    fn render_to_string(policy: &Policy) -> (String, ReportResult<()>) {
        let mut out = Vec::new();
        let result = render_policy(&mut out, policy);
        (String::from_utf8(out).expect("utf-8 output"), result)
    }

    #[test]
    fn test_group_block_layout() {
        let group = AccessGroup {
            id: "AccessGroupId-9".to_string(),
            name: "Auditors".to_string(),
            description: "read-only reviewers".to_string(),
        };
        let mut out = Vec::new();
        render_group(&mut out, &group).expect("group should render");
        let text = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(
            text,
            "=================================\n\
             Access Group:\n\
             \x20 id: AccessGroupId-9\n\
             \x20 name: Auditors\n\
             \x20 description: read-only reviewers\n"
        );
    }

    #[test]
    fn test_policy_block_shows_first_subject_and_first_resource() {
        let (text, result) = render_to_string(&sample_policy());
        result.expect("policy should render");
        assert_eq!(
            text,
            "Policy:\n\
             \x20 Subject: iam_id / IBMid-001\n\
             \x20 Roles:\n\
             \x20   Viewer\n\
             \x20   Operator\n\
             \x20 Resources:\n\
             \x20 accountId: acc-1\n\
             \x20 serviceName: cloud-object-storage\n"
        );
        // The second subject attribute and the second resource entry stay out
        // of the report.
        assert!(!text.contains("scope"));
        assert!(!text.contains("acc-2"));
    }

    #[test]
    fn test_policy_without_roles_prints_an_empty_roles_section() {
        let mut policy = sample_policy();
        policy.roles.clear();
        let (text, result) = render_to_string(&policy);
        result.expect("policy should render");
        assert!(text.contains("  Roles:\n  Resources:"));
    }

    #[test]
    fn test_policy_without_subjects_is_structural() {
        let mut policy = sample_policy();
        policy.subjects.clear();
        let (text, result) = render_to_string(&policy);
        let err = result.unwrap_err();
        assert!(matches!(err, ReportError::Structural { .. }));
        // The block label went out before the failure.
        assert_eq!(text, "Policy:\n");
    }

    #[test]
    fn test_subject_without_attributes_is_structural() {
        let mut policy = sample_policy();
        policy.subjects[0].attributes.clear();
        let (_, result) = render_to_string(&policy);
        assert!(matches!(result.unwrap_err(), ReportError::Structural { .. }));
    }

    #[test]
    fn test_policy_without_resources_fails_after_the_resources_label() {
        let mut policy = sample_policy();
        policy.resources.clear();
        let (text, result) = render_to_string(&policy);
        assert!(matches!(result.unwrap_err(), ReportError::Structural { .. }));
        assert!(text.ends_with("  Resources:\n"));
    }
}
