//! Tenant API resources.
//!
//! Each submodule wraps one backend resource. Most implement
//! [`RestResource`](crate::rest::RestResource) and add a few
//! resource-specific operations; [`BulkUpload`] and [`DashboardStats`] are
//! plain endpoint wrappers.
//!
//! # Update verbs
//!
//! `update` is a PATCH everywhere and sends only the fields set on the
//! input. [`Popup`], [`PopupForm`], [`Video`] and [`TeamMember`] are edited
//! with `replace` (PUT) instead, because their backend forms require the
//! whole record.
//!
//! # Credentials
//!
//! | Resource | Sent with |
//! |---|---|
//! | [`Appointment`], [`Booking`], [`Collection`], [`CollectionData`], [`Popup`], [`PopupForm`], [`Video`], [`OurClient`], [`TeamMember`] | no token |
//! | [`Order`] create | no token, or the customer token via [`Order::create_as`] |
//! | everything else | admin token |
//!
//! # Example
//!
//! ```rust,ignore
//! use nepdora_api::rest::RestResource;
//! use nepdora_api::rest::resources::{BasicListParams, PromoCode, Testimonial};
//!
//! let testimonials = Testimonial::all(&client, Some(BasicListParams::search("great"))).await?;
//! let check = PromoCode::validate(&client, "DASHAIN").await?;
//! ```

mod common;

mod appointment;
mod booking;
mod bulk_upload;
mod category;
mod collection;
mod dashboard;
mod delivery_charge;
mod faq;
mod integrations;
mod issue;
mod logistics;
mod order;
mod our_client;
mod payment_gateway;
mod popup;
mod portfolio;
mod pricing;
mod promo_code;
mod service;
mod team_member;
mod testimonial;
mod video;

pub use common::BasicListParams;

pub use appointment::{
    Appointment, AppointmentInput, AppointmentListParams, AppointmentReason, AppointmentStatus,
    AppointmentUpdate,
};
pub use booking::{Booking, BookingUpdate};
pub use bulk_upload::{BulkUpload, BulkUploadReport, BulkUploadRowError};
pub use category::{Category, CategoryInput, CategoryListParams, CategorySort, CategoryUpdate};
pub use collection::{
    Collection, CollectionData, CollectionDataFilters, CollectionDataInput, CollectionInput,
};
pub use dashboard::DashboardStats;
pub use delivery_charge::{DefaultDeliveryCharges, DeliveryCharge, DeliveryChargeInput};
pub use faq::{Faq, FaqInput};
pub use integrations::{
    FacebookIntegration, FacebookIntegrationInput, GoogleAnalytics, GoogleAnalyticsInput,
    WhatsApp, WhatsAppInput,
};
pub use issue::{Issue, IssueCategory, IssueCategoryInput, IssueInput};
pub use logistics::{Logistics, LogisticsInput, LogisticsProvider};
pub use order::{
    Order, OrderInput, OrderItem, OrderItemInput, OrderListParams, OrderStatus, OrderUpdate,
};
pub use our_client::{OurClient, OurClientInput, OurClientListParams};
pub use payment_gateway::{PaymentGateway, PaymentGatewayInput, PaymentType};
pub use popup::{Popup, PopupForm, PopupFormListParams, PopupInput, PopupListParams};
pub use portfolio::{
    NameInput, Portfolio, PortfolioCategory, PortfolioInput, PortfolioListParams, PortfolioTag,
};
pub use pricing::{PricingListParams, PricingPlan, PricingPlanInput};
pub use promo_code::{PromoCode, PromoCodeInput, PromoCodeValidation};
pub use service::{Service, ServiceInput, ServiceListParams};
pub use team_member::{TeamMember, TeamMemberInput};
pub use testimonial::{Testimonial, TestimonialInput, TestimonialListParams};
pub use video::{Video, VideoInput};
