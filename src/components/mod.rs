//! UI Components
//!
//! Reusable Leptos components.

mod form_header;
mod site_header;
mod basket_drawer;
mod remove_confirm_button;
mod variant_selector;
mod checkout_progress;
mod checkout;
mod checkout_donation;
mod donation_slider;
mod donation_presets;
mod donation_cards;
mod checkout_additional_forms;
mod calendar_filters;
mod lesson_tree;
mod product_page;
mod sign_in_modal;
mod contact_form;
mod accept_invite;
mod product_media;

pub use form_header::FormHeader;
pub use site_header::SiteHeader;
pub use basket_drawer::BasketDrawer;
pub use remove_confirm_button::RemoveConfirmButton;
pub use variant_selector::VariantSelector;
pub use checkout_progress::CheckoutProgress;
pub use checkout::Checkout;
pub use checkout_donation::CheckoutDonation;
pub use donation_slider::DonationSlider;
pub use donation_presets::DonationPresets;
pub use donation_cards::DonationCards;
pub use checkout_additional_forms::CheckoutAdditionalForms;
pub use calendar_filters::CalendarPage;
pub use lesson_tree::LessonTree;
pub use product_page::ProductPage;
pub use sign_in_modal::SignInModal;
pub use contact_form::ContactForm;
pub use accept_invite::AcceptInvite;
pub use product_media::ProductMedia;
