//! Stable URIs identifying schema positions in a project document.
//!
//! Every property produced by flattening carries one of these URIs (or a
//! descendant of one). Collection positions are marked with a `#collection`
//! suffix; attribute positions with `#property`. The [`collection_item`]
//! table is the whitelist of structural positions that require collection
//! semantics — everything else flattens as scalar leaves.

/// Base URI of every model property.
pub const BASE: &str = "project";

pub const MODEL_VERSION: &str = "project/modelVersion";
pub const GROUP_ID: &str = "project/groupId";
pub const ARTIFACT_ID: &str = "project/artifactId";
pub const VERSION: &str = "project/version";
pub const PACKAGING: &str = "project/packaging";
pub const NAME: &str = "project/name";
pub const URL: &str = "project/url";
pub const PROPERTIES: &str = "project/properties";
pub const MODULES: &str = "project/modules#collection";
pub const MODULE: &str = "project/modules#collection/module";
pub const PROFILES: &str = "project/profiles#collection";
pub const LICENSES: &str = "project/licenses#collection";
pub const ORGANIZATION: &str = "project/organization";
pub const DEVELOPERS: &str = "project/developers#collection";
pub const CONTRIBUTORS: &str = "project/contributors#collection";
pub const MAILING_LISTS: &str = "project/mailingLists#collection";
pub const CI_MANAGEMENT: &str = "project/ciManagement";
pub const ISSUE_MANAGEMENT: &str = "project/issueManagement";
pub const REPOSITORIES: &str = "project/repositories#collection";
pub const REPOSITORY: &str = "project/repositories#collection/repository";
pub const PLUGIN_REPOSITORIES: &str = "project/pluginRepositories#collection";
pub const PLUGIN_REPOSITORY: &str = "project/pluginRepositories#collection/pluginRepository";

pub mod parent {
    pub const X_URI: &str = "project/parent";
    pub const GROUP_ID: &str = "project/parent/groupId";
    pub const ARTIFACT_ID: &str = "project/parent/artifactId";
    pub const VERSION: &str = "project/parent/version";
    pub const RELATIVE_PATH: &str = "project/parent/relativePath";
}

pub mod scm {
    pub const X_URI: &str = "project/scm";
    pub const URL: &str = "project/scm/url";
    pub const CONNECTION: &str = "project/scm/connection";
    pub const DEVELOPER_CONNECTION: &str = "project/scm/developerConnection";
}

pub mod build {
    pub const X_URI: &str = "project/build";
    pub const DIRECTORY: &str = "project/build/directory";
    pub const OUTPUT_DIRECTORY: &str = "project/build/outputDirectory";
    pub const TEST_OUTPUT_DIRECTORY: &str = "project/build/testOutputDirectory";
    pub const SOURCE_DIRECTORY: &str = "project/build/sourceDirectory";
    pub const TEST_SOURCE_DIRECTORY: &str = "project/build/testSourceDirectory";
    pub const SCRIPT_SOURCE_DIRECTORY: &str = "project/build/scriptSourceDirectory";
    pub const FINAL_NAME: &str = "project/build/finalName";
    pub const EXTENSIONS: &str = "project/build/extensions#collection";
    pub const RESOURCES: &str = "project/build/resources#collection";
    pub const TEST_RESOURCES: &str = "project/build/testResources#collection";
    pub const FILTERS: &str = "project/build/filters#collection";

    pub mod plugins {
        pub const X_URI: &str = "project/build/plugins#collection";
        pub const PLUGIN: &str = "project/build/plugins#collection/plugin";
        pub const GROUP_ID: &str = "project/build/plugins#collection/plugin/groupId";
        pub const ARTIFACT_ID: &str = "project/build/plugins#collection/plugin/artifactId";
        pub const VERSION: &str = "project/build/plugins#collection/plugin/version";
        pub const INHERITED: &str = "project/build/plugins#collection/plugin/inherited";
        pub const EXECUTIONS: &str =
            "project/build/plugins#collection/plugin/executions#collection";
        pub const EXECUTION: &str =
            "project/build/plugins#collection/plugin/executions#collection/execution";
        pub const EXECUTION_ID: &str =
            "project/build/plugins#collection/plugin/executions#collection/execution/id";
        pub const EXECUTION_INHERITED: &str =
            "project/build/plugins#collection/plugin/executions#collection/execution/inherited";
    }

    pub mod plugin_management {
        pub const X_URI: &str = "project/build/pluginManagement";
        pub const PLUGINS: &str = "project/build/pluginManagement/plugins#collection";
        pub const PLUGIN: &str = "project/build/pluginManagement/plugins#collection/plugin";
    }
}

pub mod dependencies {
    pub const X_URI: &str = "project/dependencies#collection";
    pub const DEPENDENCY: &str = "project/dependencies#collection/dependency";
    pub const GROUP_ID: &str = "project/dependencies#collection/dependency/groupId";
    pub const ARTIFACT_ID: &str = "project/dependencies#collection/dependency/artifactId";
    pub const VERSION: &str = "project/dependencies#collection/dependency/version";
    pub const TYPE: &str = "project/dependencies#collection/dependency/type";
    pub const EXCLUSIONS: &str =
        "project/dependencies#collection/dependency/exclusions#collection";
    pub const EXCLUSION: &str =
        "project/dependencies#collection/dependency/exclusions#collection/exclusion";
}

pub mod dependency_management {
    pub const X_URI: &str = "project/dependencyManagement";
    pub const DEPENDENCIES: &str = "project/dependencyManagement/dependencies#collection";
    pub const DEPENDENCY: &str =
        "project/dependencyManagement/dependencies#collection/dependency";
}

pub mod reporting {
    pub const X_URI: &str = "project/reporting";
    pub const OUTPUT_DIRECTORY: &str = "project/reporting/outputDirectory";
    pub const PLUGINS: &str = "project/reporting/plugins#collection";
    pub const PLUGIN: &str = "project/reporting/plugins#collection/plugin";
    pub const REPORT_SETS: &str =
        "project/reporting/plugins#collection/plugin/reportSets#collection";
    pub const REPORT_SET: &str =
        "project/reporting/plugins#collection/plugin/reportSets#collection/reportSet";
}

pub mod distribution_management {
    pub const X_URI: &str = "project/distributionManagement";
    pub const REPOSITORY: &str = "project/distributionManagement/repository";
    pub const SNAPSHOT_REPOSITORY: &str = "project/distributionManagement/snapshotRepository";
    pub const SITE: &str = "project/distributionManagement/site";
    pub const SITE_URL: &str = "project/distributionManagement/site/url";
}

/// Collection whitelist: maps a `#collection` URI to the tag each member
/// carries. Flattening a non-whitelisted array is a structural error.
static COLLECTIONS: &[(&str, &str)] = &[
    (MODULES, "module"),
    ("project/dependencies#collection", "dependency"),
    (dependencies::EXCLUSIONS, "exclusion"),
    (dependency_management::DEPENDENCIES, "dependency"),
    (
        "project/dependencyManagement/dependencies#collection/dependency/exclusions#collection",
        "exclusion",
    ),
    (build::EXTENSIONS, "extension"),
    (build::RESOURCES, "resource"),
    (
        "project/build/resources#collection/resource/includes#collection",
        "include",
    ),
    (
        "project/build/resources#collection/resource/excludes#collection",
        "exclude",
    ),
    (build::TEST_RESOURCES, "testResource"),
    (build::FILTERS, "filter"),
    (build::plugins::X_URI, "plugin"),
    (
        "project/build/plugins#collection/plugin/dependencies#collection",
        "dependency",
    ),
    (build::plugins::EXECUTIONS, "execution"),
    (
        "project/build/plugins#collection/plugin/executions#collection/execution/goals#collection",
        "goal",
    ),
    (build::plugin_management::PLUGINS, "plugin"),
    (
        "project/build/pluginManagement/plugins#collection/plugin/dependencies#collection",
        "dependency",
    ),
    (
        "project/build/pluginManagement/plugins#collection/plugin/executions#collection",
        "execution",
    ),
    (reporting::PLUGINS, "plugin"),
    (reporting::REPORT_SETS, "reportSet"),
    (REPOSITORIES, "repository"),
    (PLUGIN_REPOSITORIES, "pluginRepository"),
    (LICENSES, "license"),
    (DEVELOPERS, "developer"),
    (
        "project/developers#collection/developer/roles#collection",
        "role",
    ),
    (CONTRIBUTORS, "contributor"),
    (MAILING_LISTS, "mailingList"),
    ("project/ciManagement/notifiers#collection", "notifier"),
    (PROFILES, "profile"),
    ("project/profiles#collection/profile/modules#collection", "module"),
    (
        "project/profiles#collection/profile/dependencies#collection",
        "dependency",
    ),
    (
        "project/profiles#collection/profile/dependencyManagement/dependencies#collection",
        "dependency",
    ),
    (
        "project/profiles#collection/profile/repositories#collection",
        "repository",
    ),
    (
        "project/profiles#collection/profile/pluginRepositories#collection",
        "pluginRepository",
    ),
    (
        "project/profiles#collection/profile/build/plugins#collection",
        "plugin",
    ),
    (
        "project/profiles#collection/profile/build/plugins#collection/plugin/executions#collection",
        "execution",
    ),
    (
        "project/profiles#collection/profile/build/resources#collection",
        "resource",
    ),
    (
        "project/profiles#collection/profile/build/testResources#collection",
        "testResource",
    ),
    (
        "project/profiles#collection/profile/build/pluginManagement/plugins#collection",
        "plugin",
    ),
    (
        "project/profiles#collection/profile/reporting/plugins#collection",
        "plugin",
    ),
];

/// Look up the member tag for a whitelisted collection URI.
#[must_use]
pub fn collection_item(uri: &str) -> Option<&'static str> {
    COLLECTIONS
        .iter()
        .find(|(collection, _)| *collection == uri)
        .map(|(_, item)| *item)
}

/// Returns `true` when `uri` is `base` itself or a descendant of it.
///
/// Matching is segment-aware: `project/build` is not within `project/bui`.
#[must_use]
pub fn is_within(uri: &str, base: &str) -> bool {
    uri.strip_prefix(base).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with('/') || rest.starts_with('#')
    })
}

/// Parent URI, or `None` at the base.
#[must_use]
pub fn parent(uri: &str) -> Option<&str> {
    uri.rsplit_once('/').map(|(parent, _)| parent)
}

/// Final path segment of the URI.
#[must_use]
pub fn last_segment(uri: &str) -> &str {
    uri.rsplit_once('/').map_or(uri, |(_, segment)| segment)
}

/// Returns `true` when the URI carries a `#collection` or `#property` marker.
#[must_use]
pub fn has_marker(uri: &str) -> bool {
    uri.contains("#collection") || uri.contains("#property")
}
