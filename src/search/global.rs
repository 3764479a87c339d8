//! Global search and command-list support.
//!
//! The subscriber decides *what* the global search box should query for
//! leads and which commands the user may type; running the query and
//! rendering results stay with the host application.

use super::subscriber::LeadSearchSubscriber;
use crate::constants::{permissions, translation_keys};
use crate::query_builder::Pagination;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Permission boundary
pub trait Authorizer: Send + Sync {
    fn is_granted(&self, permission: &str) -> bool;

    /// True when at least one of `permissions` is granted
    fn is_granted_any(&self, permissions: &[&str]) -> bool {
        permissions.iter().any(|permission| self.is_granted(permission))
    }
}

/// Authorizer backed by a fixed set of granted permissions
#[derive(Debug, Clone, Default)]
pub struct GrantedPermissions(HashSet<String>);

impl GrantedPermissions {
    pub fn new<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(permissions.into_iter().map(Into::into).collect())
    }
}

impl Authorizer for GrantedPermissions {
    fn is_granted(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }
}

/// Lead filter for the global search box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// What the user typed
    pub string: String,
    /// Commands appended regardless of input
    pub force: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSearchRequest {
    pub filter: SearchFilter,
    pub limit: u32,
    pub with_total_count: bool,
}

impl GlobalSearchRequest {
    pub fn pagination(&self) -> Pagination {
        Pagination::limit_only(self.limit)
    }
}

/// Result count of a global search as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalSearchSummary {
    pub count: u64,
    /// Leads not listed, when the count exceeds the limit
    pub remaining: Option<u64>,
}

impl GlobalSearchSummary {
    pub fn new(count: u64, limit: u32) -> Self {
        let remaining = Pagination::limit_only(limit).remaining(count);
        Self {
            count,
            remaining: (remaining > 0).then_some(remaining),
        }
    }
}

impl LeadSearchSubscriber {
    /// Build the lead query request for a global search string.
    ///
    /// Anonymous leads are hidden unless the user asked for them, and users
    /// who may not view other users' leads only see their own. Returns
    /// `None` for an empty string or when no lead view permission is held.
    pub fn on_global_search(&self, search: &str) -> Option<GlobalSearchRequest> {
        if search.is_empty() {
            return None;
        }

        let view_own = self.authorizer.is_granted(permissions::LEADS_VIEW_OWN);
        let view_other = self.authorizer.is_granted(permissions::LEADS_VIEW_OTHER);
        if !view_own && !view_other {
            return None;
        }

        let anonymous = self.localizer.translate(translation_keys::IS_ANONYMOUS, None);
        let mut force = String::new();
        if !search.contains(&anonymous) {
            force.push_str(&format!(" !{anonymous}"));
        }
        if !view_other {
            let mine = self.localizer.translate(translation_keys::IS_MINE, None);
            force.push_str(&format!(" {mine}"));
        }

        Some(GlobalSearchRequest {
            filter: SearchFilter {
                string: search.to_string(),
                force,
            },
            limit: self.config.global_search_limit,
            with_total_count: true,
        })
    }

    /// Localized command labels under the leads group, for users allowed to
    /// view leads
    pub fn on_build_command_list(&self) -> Option<(String, Vec<String>)> {
        if !self
            .authorizer
            .is_granted_any(&[permissions::LEADS_VIEW_OWN, permissions::LEADS_VIEW_OTHER])
        {
            return None;
        }

        let group = self.localizer.translate(translation_keys::LEADS_GROUP, None);
        let labels = self.dispatcher.labels().map(str::to_string).collect();
        Some((group, labels))
    }
}
