//! # Query Filters
//!
//! A list request is narrowed with a set of [`Query`] filters. Every filter must match
//! for a resource to be returned. Only equality comparison is supported.

use std::fmt::{self, Display};

/// Field a [`Query`] filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryFilter {
    Name,
    OrganizationGuid,
    SpaceGuid,
    RouteGuid,
}

impl QueryFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFilter::Name => "name",
            QueryFilter::OrganizationGuid => "organization_guid",
            QueryFilter::SpaceGuid => "space_guid",
            QueryFilter::RouteGuid => "route_guid",
        }
    }
}

/// Comparison applied by a [`Query`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperator {
    Equal,
}

impl QueryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOperator::Equal => ":",
        }
    }
}

/// A single `field operator value` filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub filter: QueryFilter,
    pub operator: QueryOperator,
    pub value: String,
}

impl Query {
    pub fn equal(filter: QueryFilter, value: impl Into<String>) -> Self {
        Self {
            filter,
            operator: QueryOperator::Equal,
            value: value.into(),
        }
    }

    pub fn name(value: impl Into<String>) -> Self {
        Self::equal(QueryFilter::Name, value)
    }

    pub fn organization_guid(value: impl Into<String>) -> Self {
        Self::equal(QueryFilter::OrganizationGuid, value)
    }

    pub fn space_guid(value: impl Into<String>) -> Self {
        Self::equal(QueryFilter::SpaceGuid, value)
    }

    pub fn route_guid(value: impl Into<String>) -> Self {
        Self::equal(QueryFilter::RouteGuid, value)
    }

    /// Whether `candidate` satisfies this filter's comparison.
    pub fn accepts(&self, candidate: &str) -> bool {
        match self.operator {
            QueryOperator::Equal => self.value == candidate,
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.filter.as_str(),
            self.operator.as_str(),
            self.value
        )
    }
}
