//! Typed schema for the content document.
//!
//! The content document is a single JSON file with a `common` subtree plus
//! one subtree per page. Every field a binder reads is wrapped in a
//! [`Slot`], so absence is a typed condition rather than an implicit
//! undefined-check:
//!
//! ```text
//! {
//!   "common":     { "navigation": {...}, "footer": {...}, "loading": {...} },
//!   "home":       { "hero": {...}, "statusCards": [...], ... },
//!   "challenges": { "header": {...}, "categories": [...], "stats": [...] },
//!   "dashboard":  { "header": {...}, "stats": [...], "charts": {...} },
//!   "register":   { "header": {...}, "benefits": {...} },
//!   "about":      { "header": {...}, "mission": {...}, "timeline": [...], ... }
//! }
//! ```
//!
//! ## Leniency
//!
//! Parsing the document never fails because of one bad field. A slot whose
//! JSON has the wrong shape deserializes to [`Slot::Malformed`] and the
//! binder reading it skips only the affected anchor. Scalars inside list
//! records use [`Text`], which accepts strings, numbers and booleans and
//! defaults to empty when the key is missing.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::ops::Deref;

/// An optional, shape-checked field of the content document.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Present(T),
    /// Key absent or `null`.
    Missing,
    /// Key present but not the expected shape.
    Malformed,
}

impl<T> Slot<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Slot::Present(value) => Some(value),
            Slot::Missing | Slot::Malformed => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Slot::Present(_))
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Missing
    }
}

impl<T> From<T> for Slot<T> {
    fn from(value: T) -> Self {
        Slot::Present(value)
    }
}

impl<'de, T: DeserializeOwned + Shape> Deserialize<'de> for Slot<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if value.is_null() {
            return Ok(Slot::Missing);
        }
        if !T::fits(&value) {
            return Ok(Slot::Malformed);
        }
        Ok(T::deserialize(value).map_or(Slot::Malformed, Slot::Present))
    }
}

/// JSON shape a slot's type expects, checked before deserializing.
///
/// Derived structs also accept arrays (as positional fields), so record
/// types must insist on an object here.
pub trait Shape {
    fn fits(value: &Value) -> bool {
        value.is_object()
    }
}

impl<T: Shape> Shape for Vec<T> {
    fn fits(value: &Value) -> bool {
        value
            .as_array()
            .is_some_and(|items| items.iter().all(T::fits))
    }
}

impl<T: Shape> Shape for IndexMap<String, T> {
    fn fits(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|entries| entries.values().all(T::fits))
    }
}

impl Shape for Text {
    fn fits(value: &Value) -> bool {
        !value.is_array() && !value.is_object()
    }
}

macro_rules! records {
    ($($record:ty),* $(,)?) => {
        $(impl Shape for $record {})*
    };
}

records!(
    PageHeader,
    Button,
    CallToAction,
    Feature,
    CommonContent,
    Navigation,
    NavLink,
    Footer,
    SocialLink,
    LoadingScreen,
    HomeContent,
    Hero,
    StatusCard,
    ProtocolCard,
    ChallengesContent,
    ChallengeCategory,
    Stat,
    DashboardContent,
    DashboardStat,
    ChartTitle,
    RegisterContent,
    Benefits,
    AboutContent,
    Mission,
    EventDetail,
    CategorySummary,
    TimelineEntry,
    TeamMember,
);

/// JavaScript-style truthiness for flags: `0`, `""`, `false` and `null` are
/// false, anything else is true.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Scalar display text.
///
/// Numbers and booleans are kept as their JSON spelling (`42`, `true`), so
/// counters such as `challengeCount` bind the same way strings do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(String);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Text(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Text {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Text {
    fn from(text: &str) -> Self {
        Text(text.to_string())
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Text(s)),
            Value::Number(n) => Ok(Text(n.to_string())),
            Value::Bool(b) => Ok(Text(b.to_string())),
            Value::Null => Ok(Text::default()),
            Value::Array(_) => Err(D::Error::custom("expected text, found an array")),
            Value::Object(_) => Err(D::Error::custom("expected text, found an object")),
        }
    }
}

// ============================================================================
// Document root
// ============================================================================

/// The whole content document. Immutable once loaded.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    pub common: Slot<CommonContent>,
    pub home: Slot<HomeContent>,
    pub challenges: Slot<ChallengesContent>,
    pub dashboard: Slot<DashboardContent>,
    pub register: Slot<RegisterContent>,
    pub about: Slot<AboutContent>,
}

impl ContentDocument {
    /// Parse a document. The root must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom(
                "content document must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }
}

// ============================================================================
// Shared shapes
// ============================================================================

/// Title/subtitle pair used at the top of every secondary page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageHeader {
    pub title: Slot<Text>,
    pub subtitle: Slot<Text>,
}

/// A call-to-action link rendered as `a.btn`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Button {
    pub href: Text,
    pub text: Text,
    #[serde(deserialize_with = "truthy")]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CallToAction {
    pub title: Slot<Text>,
    pub text: Slot<Text>,
    pub buttons: Slot<Vec<Button>>,
}

/// Icon + title + description, the shape of workshops and mission highlights.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub icon: Text,
    pub title: Text,
    pub description: Text,
}

// ============================================================================
// common
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommonContent {
    pub navigation: Slot<Navigation>,
    pub footer: Slot<Footer>,
    pub loading: Slot<LoadingScreen>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Navigation {
    pub logo: Slot<Text>,
    pub links: Slot<Vec<NavLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub href: Text,
    pub label: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub logo: Slot<Text>,
    pub copyright: Slot<Text>,
    pub social_links: Slot<Vec<SocialLink>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub href: Text,
    pub name: Text,
    /// Icon font class list, e.g. `fab fa-github`.
    pub icon: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoadingScreen {
    pub logo: Slot<Text>,
    pub text: Slot<Text>,
}

// ============================================================================
// home
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    pub hero: Slot<Hero>,
    pub status_cards: Slot<Vec<StatusCard>>,
    pub protocol_cards: Slot<Vec<ProtocolCard>>,
    pub workshops: Slot<Vec<Feature>>,
    pub cta: Slot<CallToAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub badge: Slot<Text>,
    pub title: Slot<Text>,
    pub subtitle: Slot<Text>,
    pub description: Slot<Text>,
    pub cta: Slot<Vec<Button>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusCard {
    pub icon: Text,
    pub title: Text,
    pub value: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProtocolCard {
    pub href: Text,
    pub icon: Text,
    pub title: Text,
    pub description: Text,
    pub features: Vec<Text>,
}

// ============================================================================
// challenges
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChallengesContent {
    pub header: Slot<PageHeader>,
    pub categories: Slot<Vec<ChallengeCategory>>,
    pub stats: Slot<Vec<Stat>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChallengeCategory {
    pub id: Text,
    pub difficulty: Text,
    pub icon: Text,
    pub title: Text,
    pub challenge_count: Text,
    pub total_points: Text,
    pub description: Text,
    pub challenges: Vec<Challenge>,
    pub stats: CategoryStats,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Challenge {
    pub name: Text,
    pub points: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryStats {
    pub participants: Text,
    pub completion: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub icon: Text,
    pub value: Text,
    pub label: Text,
}

// ============================================================================
// dashboard
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardContent {
    pub header: Slot<PageHeader>,
    pub stats: Slot<Vec<DashboardStat>>,
    /// Chart card titles keyed by chart name, in document order.
    pub charts: Slot<IndexMap<String, ChartTitle>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardStat {
    /// Element id given to the value; the change line gets `{id}-change`.
    pub id: Text,
    pub icon: Text,
    pub value: Text,
    pub label: Text,
    pub change: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartTitle {
    pub title: Slot<Text>,
    pub icon: Slot<Text>,
}

// ============================================================================
// register
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegisterContent {
    pub header: Slot<PageHeader>,
    pub benefits: Slot<Benefits>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Benefits {
    pub title: Slot<Text>,
    pub items: Slot<Vec<Text>>,
}

// ============================================================================
// about
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub header: Slot<PageHeader>,
    pub mission: Slot<Mission>,
    pub event_details: Slot<Vec<EventDetail>>,
    pub challenge_categories: Slot<Vec<CategorySummary>>,
    pub timeline: Slot<Vec<TimelineEntry>>,
    pub team: Slot<Vec<TeamMember>>,
    pub cta: Slot<CallToAction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mission {
    pub title: Slot<Text>,
    pub text: Slot<Text>,
    pub highlights: Slot<Vec<Feature>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EventDetail {
    pub title: Text,
    pub content: Text,
    pub subtitle: Text,
    pub items: Vec<Text>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategorySummary {
    pub title: Text,
    pub description: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub title: Text,
    pub description: Text,
    pub date: Text,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    pub avatar: Text,
    pub name: Text,
    pub role: Text,
    pub bio: Text,
}
