//! Static registry of the procurement sub-features shown on the landing page.

use std::fmt;
use std::str::FromStr;

use crate::{Error, err};

pub const PAGE_TITLE: &str = "Procurement";

/// Informational only; the workflow order is not enforced anywhere.
pub const BREADCRUMB: &str = "Activity Plan → PR → (PO if required) → GRN";

/// Where the back control on the landing page goes.
pub const PARENT_PATH: &str = "/dashboard";

pub const PROCUREMENT_PATH: &str = "/procurement";

/// Symbolic glyph names. Rendering them is up to the icon layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CheckCircle,
    ClipboardList,
    Calendar,
    FileText,
    ShoppingCart,
    PackageCheck,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::CheckCircle => "check-circle",
            Icon::ClipboardList => "clipboard-list",
            Icon::Calendar => "calendar",
            Icon::FileText => "file-text",
            Icon::ShoppingCart => "shopping-cart",
            Icon::PackageCheck => "package-check",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display and routing metadata for one procurement sub-feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub path: &'static str,
    /// Accent token, e.g. `"indigo"`. Presentational only.
    pub color: &'static str,
}

/// Ordered as they appear in the grid.
pub static MODULES: [ModuleDescriptor; 6] = [
    ModuleDescriptor {
        title: "Approvals",
        description: "Review and act on procurement documents awaiting your sign-off.",
        icon: Icon::CheckCircle,
        path: "/procurement/approvals",
        color: "emerald",
    },
    ModuleDescriptor {
        title: "Summary Requests",
        description: "Consolidate departmental needs into summary requests for budgeting.",
        icon: Icon::ClipboardList,
        path: "/procurement/summary",
        color: "blue",
    },
    ModuleDescriptor {
        title: "Activity Plans",
        description: "Plan procurement activities and schedules for the period.",
        icon: Icon::Calendar,
        path: "/procurement/activity-plans",
        color: "violet",
    },
    ModuleDescriptor {
        title: "Purchase Requests (PR)",
        description: "Raise purchase requests against approved activity plans.",
        icon: Icon::FileText,
        path: "/procurement/pr",
        color: "amber",
    },
    ModuleDescriptor {
        title: "Purchase Orders (PO)",
        description: "Issue purchase orders to suppliers when a PR requires one.",
        icon: Icon::ShoppingCart,
        path: "/procurement/po",
        color: "indigo",
    },
    ModuleDescriptor {
        title: "Goods Received (GRN)",
        description: "Record goods received notes for delivered items.",
        icon: Icon::PackageCheck,
        path: "/procurement/grn",
        color: "teal",
    },
];

/// Typed key for an entry in [`MODULES`]. Displays and parses as its slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcurementModule {
    Approvals,
    SummaryRequests,
    ActivityPlans,
    PurchaseRequests,
    PurchaseOrders,
    GoodsReceived,
}

impl ProcurementModule {
    /// Same order as [`MODULES`].
    pub const ALL: [ProcurementModule; 6] = [
        ProcurementModule::Approvals,
        ProcurementModule::SummaryRequests,
        ProcurementModule::ActivityPlans,
        ProcurementModule::PurchaseRequests,
        ProcurementModule::PurchaseOrders,
        ProcurementModule::GoodsReceived,
    ];

    fn index(self) -> usize {
        match self {
            ProcurementModule::Approvals => 0,
            ProcurementModule::SummaryRequests => 1,
            ProcurementModule::ActivityPlans => 2,
            ProcurementModule::PurchaseRequests => 3,
            ProcurementModule::PurchaseOrders => 4,
            ProcurementModule::GoodsReceived => 5,
        }
    }

    pub fn descriptor(self) -> &'static ModuleDescriptor {
        &MODULES[self.index()]
    }

    pub fn title(self) -> &'static str {
        self.descriptor().title
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }

    /// The last path segment, e.g. `"po"`.
    pub fn slug(self) -> &'static str {
        let path = self.path();
        path.strip_prefix(PROCUREMENT_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(path)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.path() == path)
    }

    pub fn find_by_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.title() == title)
    }
}

impl fmt::Display for ProcurementModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ProcurementModule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| err!("unknown procurement module: {:?}", s).into())
    }
}
