//! Static per-filename rules.

use crate::meta::MetaTriple;

/// Inputs every rule interpolates.
pub(super) struct PageContext<'a> {
    pub brand: &'a str,
    pub location: &'a str,
    pub first_keyword: &'a str,
}

pub(super) struct PageRule {
    pub filename: &'static str,
    pub build: fn(&PageContext<'_>) -> MetaTriple,
}

pub(super) const PAGE_RULES: &[PageRule] = &[
    PageRule {
        filename: "about.html",
        build: about,
    },
    PageRule {
        filename: "contact.html",
        build: contact,
    },
    PageRule {
        filename: "services.html",
        build: services,
    },
    PageRule {
        filename: "product-detail.html",
        build: product_detail,
    },
    PageRule {
        filename: "cart.html",
        build: cart,
    },
    PageRule {
        filename: "buynow.html",
        build: buynow,
    },
    PageRule {
        filename: "yourorders.html",
        build: your_orders,
    },
    PageRule {
        filename: "privacy.html",
        build: privacy,
    },
    PageRule {
        filename: "terms.html",
        build: terms,
    },
    PageRule {
        filename: "shipping.html",
        build: shipping,
    },
    PageRule {
        filename: "return.html",
        build: returns,
    },
];

fn about(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, first_keyword } = c;
    MetaTriple::new(
        format!("About Us – {brand}"),
        format!(
            "Learn about {brand} in {location}. Our story, mission, and commitment to providing the best products and services."
        ),
        format!("about {brand}, {location}, our story, company information, {first_keyword}"),
    )
}

fn contact(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Contact Us – {brand} | {location}"),
        format!(
            "Contact {brand} in {location}. Get in touch for inquiries, support, or visit our store. We're here to help!"
        ),
        format!("contact {brand}, {location}, phone, email, address, customer support"),
    )
}

fn services(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, first_keyword } = c;
    MetaTriple::new(
        format!("Our Services – {brand}"),
        format!(
            "Explore services offered by {brand} in {location}. Quality services tailored to your needs."
        ),
        format!("services {location}, {brand}, offerings, solutions, {first_keyword}"),
    )
}

fn product_detail(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, first_keyword } = c;
    MetaTriple::new(
        format!("Product Details – {brand}"),
        format!(
            "View detailed product information at {brand}. Quality products in {location} with fast delivery."
        ),
        format!("products {location}, {brand}, buy online, product details, {first_keyword}"),
    )
}

fn cart(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Shopping Cart – {brand}"),
        format!(
            "Review your shopping cart at {brand}. Secure checkout and fast delivery in {location}."
        ),
        format!("shopping cart, checkout, {brand}, buy online {location}"),
    )
}

fn buynow(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Checkout – {brand}"),
        format!(
            "Complete your purchase at {brand}. Safe and secure checkout with multiple payment options."
        ),
        format!("checkout, buy now, {brand}, secure payment, online shopping {location}"),
    )
}

fn your_orders(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Your Orders – {brand}"),
        format!("Track and view your orders from {brand}. Order history and delivery status."),
        format!("my orders, order history, {brand}, track order {location}"),
    )
}

fn privacy(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Privacy Policy – {brand}"),
        format!(
            "Read the privacy policy of {brand}. How we protect and handle your personal information."
        ),
        format!("privacy policy, {brand}, data protection, privacy {location}"),
    )
}

fn terms(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Terms & Conditions – {brand}"),
        format!(
            "Terms and conditions for using {brand} services. Please read before making a purchase."
        ),
        format!("terms conditions, {brand}, legal, terms of service {location}"),
    )
}

fn shipping(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Shipping Policy – {brand}"),
        format!(
            "Shipping and delivery information for {brand}. Delivery times, charges, and areas covered in {location}."
        ),
        format!("shipping policy, delivery, {brand}, shipping charges {location}"),
    )
}

fn returns(c: &PageContext<'_>) -> MetaTriple {
    let PageContext { brand, location, .. } = c;
    MetaTriple::new(
        format!("Return & Refund Policy – {brand}"),
        format!(
            "Return and refund policy for {brand}. Easy returns and hassle-free refunds in {location}."
        ),
        format!("return policy, refund, {brand}, easy returns {location}"),
    )
}
