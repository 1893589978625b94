use std::collections::BTreeSet;

use serde::Serialize;

use crate::catalogue::Catalogue;

/// Names of every project sharing one tag; backs one sub-menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagGroup {
    pub tag: String,
    pub members: Vec<String>,
}

impl TagGroup {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Groups project names by tag.
///
/// Groups are sorted by tag; members keep catalogue order and a project joins
/// a group once even when it repeats the tag. Projects without tags end up in
/// no group at all and so cannot be reached from the menu.
pub fn index_tags(catalogue: &Catalogue) -> Vec<TagGroup> {
    let tags = catalogue
        .projects()
        .iter()
        .flat_map(|project| project.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>();

    tags.into_iter()
        .map(|tag| TagGroup {
            tag: tag.to_string(),
            members: catalogue
                .projects()
                .iter()
                .filter(|project| project.has_tag(tag))
                .map(|project| project.name.clone())
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Project;

    fn project(name: &str, tags: &[&str]) -> Project {
        Project {
            name: name.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            header: format!("{name} header"),
            body: format!("{name} body"),
        }
    }

    #[test]
    fn groups_are_sorted_and_members_keep_catalogue_order() {
        let catalogue = Catalogue::new(vec![
            project("Zeta", &["web", "rust"]),
            project("Alpha", &["rust"]),
            project("Mid", &["games", "web"]),
        ]);

        let groups = index_tags(&catalogue);

        let tags = groups.iter().map(|g| g.tag.as_str()).collect::<Vec<_>>();
        assert_eq!(tags, vec!["games", "rust", "web"]);
        assert_eq!(groups[1].members, vec!["Zeta", "Alpha"]);
        assert_eq!(groups[2].members, vec!["Zeta", "Mid"]);
    }

    #[test]
    fn tagless_project_is_in_no_group() {
        let catalogue = Catalogue::new(vec![project("Lonely", &[]), project("Tagged", &["x"])]);

        let groups = index_tags(&catalogue);

        assert_eq!(groups.len(), 1);
        assert!(groups
            .iter()
            .all(|g| !g.members.iter().any(|m| m == "Lonely")));
    }

    #[test]
    fn repeated_tag_counts_project_once() {
        let catalogue = Catalogue::new(vec![project("Twice", &["x", "x"])]);

        let groups = index_tags(&catalogue);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count(), 1);
    }

    #[test]
    fn uppercase_sorts_before_lowercase() {
        let catalogue = Catalogue::new(vec![project("P", &["beta", "Alpha", "alpha"])]);

        let tags = index_tags(&catalogue)
            .into_iter()
            .map(|g| g.tag)
            .collect::<Vec<_>>();
        assert_eq!(tags, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn empty_catalogue_has_no_groups() {
        assert!(index_tags(&Catalogue::default()).is_empty());
    }
}
