// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

//! Link relation types registered by the IANA Registry.
//!
//! See <http://www.iana.org/assignments/link-relations/link-relations.xhtml>.

use crate::error::{HalError, Result};
use std::fmt::{self, Display};

macro_rules! registered_rels {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )+) => {
        /// A Registered Relation Type.
        ///
        /// Names are canonical lower-case strings. Lookups are exact; fold the
        /// input to lower case first when comparing user input.
        ///
        /// ```
        /// use hal::registered::RegisteredRel;
        ///
        /// let rel = RegisteredRel::lookup("next").unwrap();
        ///
        /// assert_eq!(rel, RegisteredRel::Next);
        /// assert_eq!(rel.as_str(), "next");
        /// ```
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum RegisteredRel {
            $( $(#[$doc])* $variant, )+
        }

        impl RegisteredRel {
            const ALL: &'static [RegisteredRel] = &[ $( RegisteredRel::$variant, )+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( RegisteredRel::$variant => $name, )+
                }
            }

            /// Finds the registered relation with exactly the given name.
            pub fn lookup(name: &str) -> Result<RegisteredRel> {
                match name {
                    $( $name => Ok(RegisteredRel::$variant), )+
                    _ => Err(HalError::RelNotFound(name.to_string())),
                }
            }
        }
    };
}

registered_rels! {
    /// Not part of the IANA Registry but reserved by HAL for the CURIE syntax.
    Curies => "curies",
    /// Refers to a resource that is the subject of the link's context.
    About => "about",
    /// Refers to a substitute for this context.
    Alternate => "alternate",
    /// Refers to an appendix.
    Appendix => "appendix",
    /// Refers to a collection of records, documents, or other materials of
    /// historical interest.
    Archives => "archives",
    /// Refers to the context's author.
    Author => "author",
    /// Gives a permanent link to use for bookmarking purposes.
    Bookmark => "bookmark",
    /// Designates the preferred version of a resource.
    Canonical => "canonical",
    /// Refers to a chapter in a collection of resources.
    Chapter => "chapter",
    /// The collection resource for the context IRI.
    Collection => "collection",
    /// Refers to a table of contents.
    Contents => "contents",
    /// Refers to a copyright statement that applies to the link's context.
    Copyright => "copyright",
    /// A resource where a submission form can be obtained.
    CreateForm => "create-form",
    /// The most recent item(s) in a collection of resources.
    Current => "current",
    /// A resource from which this material was derived.
    DerivedFrom => "derivedfrom",
    /// Refers to a resource providing information about the link's context.
    DescribedBy => "describedby",
    /// The context provides a description of the target.
    Describes => "describes",
    /// Refers to a list of patent disclosures.
    Disclosure => "disclosure",
    /// A resource whose representations are byte-for-byte identical.
    Duplicate => "duplicate",
    /// Refers to a resource that can be used to edit the link's context.
    Edit => "edit",
    /// A resource where a form for editing the associated resource can be
    /// obtained.
    EditForm => "edit-form",
    /// Refers to a resource that can be used to edit media associated with
    /// the link's context.
    EditMedia => "edit-media",
    /// A related resource that is potentially large.
    Enclosure => "enclosure",
    /// The furthest preceding resource in a series of resources.
    First => "first",
    /// Refers to a glossary of terms.
    Glossary => "glossary",
    /// Refers to context-sensitive help.
    Help => "help",
    /// A resource hosted by the server indicated by the link context.
    Hosts => "hosts",
    /// A hub that enables registration for notification of updates.
    Hub => "hub",
    /// Refers to an icon representing the link's context.
    Icon => "icon",
    /// Refers to an index.
    Index => "index",
    /// A member of the collection represented by the context IRI.
    Item => "item",
    /// The furthest following resource in a series of resources.
    Last => "last",
    /// The latest version of the context.
    LatestVersion => "latest-version",
    /// Refers to a license associated with this context.
    License => "license",
    /// A Link-based Resource Descriptor Document.
    Lrdd => "lrdd",
    /// A fixed resource that will not change state anymore.
    Memento => "memento",
    /// Monitors changes in an HTTP resource.
    Monitor => "monitor",
    /// Monitors changes in a specified group of HTTP resources.
    MonitorGroup => "monitor-group",
    /// The next resource in a series.
    Next => "next",
    /// Refers to the immediately following archive resource.
    NextArchive => "next-archive",
    /// The context's original author does not endorse the link target.
    NoFollow => "nofollow",
    /// No referrer information is to be leaked when following the link.
    NoReferrer => "noreferrer",
    /// The target is an Original Resource.
    Original => "original",
    /// A resource where payment is accepted.
    Payment => "payment",
    /// The predecessor version in the version history.
    PredecessorVersion => "predecessor-version",
    /// The link target should be preemptively cached.
    Prefetch => "prefetch",
    /// The previous resource in a series.
    Prev => "prev",
    /// Provides a preview of the link's context.
    Preview => "preview",
    /// Synonym for `prev`.
    Previous => "previous",
    /// Refers to the immediately preceding archive resource.
    PrevArchive => "prev-archive",
    /// Refers to a privacy policy associated with the link's context.
    PrivacyPolicy => "privacy-policy",
    /// The representation conforms to the target profile.
    Profile => "profile",
    /// Identifies a related resource.
    Related => "related",
    /// A reply to the context of the link.
    Replies => "replies",
    /// Searches through the link's context and related resources.
    Search => "search",
    /// Refers to a section in a collection of resources.
    Section => "section",
    /// `self`: conveys an identifier for the link's context.
    SelfRel => "self",
    /// A URI that can be used to retrieve a service document.
    Service => "service",
    /// Refers to the first resource in a collection of resources.
    Start => "start",
    /// Refers to a stylesheet.
    Stylesheet => "stylesheet",
    /// A subsection in a collection of resources.
    Subsection => "subsection",
    /// The successor version in the version history.
    SuccessorVersion => "successor-version",
    /// A tag that applies to the current document.
    Tag => "tag",
    /// Refers to the terms of service associated with the link's context.
    TermsOfService => "terms-of-service",
    /// A TimeGate for an Original Resource.
    TimeGate => "timegate",
    /// A TimeMap for an Original Resource.
    TimeMap => "timemap",
    /// The abstract semantic type of the link's context.
    Type => "type",
    /// Refers to a parent document in a hierarchy of documents.
    Up => "up",
    /// The version history for the context.
    VersionHistory => "version-history",
    /// The source of the information in the link's context.
    Via => "via",
    /// Points to a working copy for this resource.
    WorkingCopy => "working-copy",
    /// The versioned resource from which this working copy was obtained.
    WorkingCopyOf => "working-copy-of",
}

impl RegisteredRel {
    /// Every registered relation, `curies` first.
    pub fn all() -> &'static [RegisteredRel] {
        RegisteredRel::ALL
    }
}

impl Display for RegisteredRel {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_self() {
        let actual = RegisteredRel::lookup("self").expect("Expect a registered rel");

        assert_eq!(actual, RegisteredRel::SelfRel);
        assert_eq!(actual.to_string(), "self");
    }

    #[test]
    fn lookup_unknown() {
        let actual = RegisteredRel::lookup("not-a-real-rel");

        assert!(matches!(actual, Err(HalError::RelNotFound(ref rel)) if rel == "not-a-real-rel"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(RegisteredRel::lookup("Self").is_err());
        assert!(RegisteredRel::lookup(" self").is_err());
    }

    #[test]
    fn kebab_case_names() {
        assert_eq!(
            RegisteredRel::lookup("working-copy-of").expect("Expect a registered rel"),
            RegisteredRel::WorkingCopyOf
        );
        assert_eq!(RegisteredRel::TermsOfService.as_str(), "terms-of-service");
    }

    #[test]
    fn table_is_consistent() {
        for rel in RegisteredRel::all() {
            let name = rel.as_str();

            assert_eq!(name, name.to_lowercase());
            assert_eq!(RegisteredRel::lookup(name).expect("Expect a registered rel"), *rel);
        }

        assert_eq!(RegisteredRel::all()[0], RegisteredRel::Curies);
    }
}
