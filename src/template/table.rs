//! Built-in business categories.

use super::CategoryTemplate;

pub(super) const CATEGORIES: &[CategoryTemplate] = &[
    CategoryTemplate {
        id: "1",
        name: "🍬 Sweets/Mithai Store",
        title: "{name} – Fresh Mithai & Sweets Online",
        description: "Order fresh sweets, mithai, and desserts online from {name}. Premium quality sweets in {location}. Free delivery on orders over ₹199.",
        keywords: "sweets {location}, mithai online, {name}, gulab jamun, rasgulla, kaju katli, online sweets delivery {location}, fresh sweets",
    },
    CategoryTemplate {
        id: "2",
        name: "👗 Fashion/Clothing Store",
        title: "{name} – Trendy Affordable Clothing Online",
        description: "Shop latest fashion trends online at {name}. Affordable clothing, accessories & more in {location}. Free delivery over ₹199.",
        keywords: "fashion {location}, online clothing, affordable fashion, {name}, trendy clothes {location}, fashion store",
    },
    CategoryTemplate {
        id: "3",
        name: "📱 Electronics Store",
        title: "{name} – Electronics & Gadgets Online",
        description: "Buy electronics, mobile accessories, and gadgets online from {name}. Best prices in {location}. Free delivery over ₹199.",
        keywords: "electronics {location}, gadgets online, {name}, mobile accessories, online electronics store {location}",
    },
    CategoryTemplate {
        id: "4",
        name: "🛒 Grocery Store",
        title: "{name} – Online Grocery Delivery",
        description: "Order fresh groceries, vegetables, and daily essentials online from {name}. Fast delivery in {location}. Free delivery over ₹199.",
        keywords: "grocery {location}, online grocery, {name}, vegetables online, daily essentials {location}, grocery delivery",
    },
    CategoryTemplate {
        id: "5",
        name: "💍 Jewelry Store",
        title: "{name} – Jewelry & Ornaments Online",
        description: "Shop beautiful jewelry, gold, silver, and artificial ornaments online from {name} in {location}. Free delivery over ₹199.",
        keywords: "jewelry {location}, online jewelry, {name}, gold jewelry, artificial jewelry {location}, ornaments online",
    },
    CategoryTemplate {
        id: "6",
        name: "🍽️ Restaurant/Cafe",
        title: "{name} – Best Restaurant in {location}",
        description: "Experience delicious food at {name}, the best restaurant in {location}. Dine-in, takeaway, and home delivery available.",
        keywords: "restaurant {location}, {name}, best food {location}, home delivery, dine-in {location}, cafe",
    },
    CategoryTemplate {
        id: "7",
        name: "🏨 Hotel/Resort",
        title: "{name} – Hotel & Resort in {location}",
        description: "Book your stay at {name}, a premium hotel in {location}. Comfortable rooms, great service, and excellent amenities.",
        keywords: "hotel {location}, {name}, resort {location}, accommodation, rooms {location}, hotel booking",
    },
    CategoryTemplate {
        id: "8",
        name: "🏥 Hospital/Clinic",
        title: "{name} – Multispecialty Hospital in {location}",
        description: "{name} is a leading hospital in {location} offering expert medical care, advanced facilities, and 24/7 emergency services.",
        keywords: "hospital {location}, {name}, medical care {location}, doctors, emergency services {location}, healthcare",
    },
    CategoryTemplate {
        id: "9",
        name: "👨‍⚕️ Doctor Website",
        title: "Dr. {name} – {location} | Book Appointment Online",
        description: "Consult Dr. {name}, experienced doctor in {location}. Book appointment online for expert medical consultation and treatment.",
        keywords: "doctor {location}, Dr. {name}, medical consultation {location}, book appointment, specialist {location}",
    },
    CategoryTemplate {
        id: "10",
        name: "🏫 School/College",
        title: "{name} – Best School in {location}",
        description: "{name} provides quality education with experienced teachers in {location}. Admission open for new session.",
        keywords: "school {location}, {name}, education {location}, admission, best school {location}, quality education",
    },
    CategoryTemplate {
        id: "11",
        name: "📚 Coaching Institute",
        title: "{name} – Coaching Classes in {location}",
        description: "Join {name} for expert coaching in {location}. Experienced faculty, proven results, and comprehensive study material.",
        keywords: "coaching {location}, {name}, classes {location}, tuition, exam preparation {location}, coaching institute",
    },
    CategoryTemplate {
        id: "12",
        name: "🏠 Real Estate",
        title: "{name} – Property Dealer in {location}",
        description: "Find your dream home with {name}, trusted property dealer in {location}. Residential & commercial properties available.",
        keywords: "property {location}, {name}, real estate {location}, buy property, sell property {location}, homes for sale",
    },
    CategoryTemplate {
        id: "13",
        name: "⚡ Electrician Service",
        title: "{name} – Electrician Services in {location}",
        description: "Professional electrician services by {name} in {location}. Electrical repair, installation, and maintenance. Call now!",
        keywords: "electrician {location}, {name}, electrical services {location}, wiring, repair {location}, electrical work",
    },
    CategoryTemplate {
        id: "14",
        name: "🔧 Plumber Service",
        title: "{name} – Plumber Services in {location}",
        description: "Expert plumber services by {name} in {location}. Plumbing repair, installation, and emergency services. Quick response!",
        keywords: "plumber {location}, {name}, plumbing services {location}, pipe repair, emergency plumber {location}",
    },
    CategoryTemplate {
        id: "15",
        name: "🧹 Cleaning Service",
        title: "{name} – Professional Cleaning Services in {location}",
        description: "Get professional cleaning services from {name} in {location}. Home, office, and deep cleaning solutions.",
        keywords: "cleaning service {location}, {name}, professional cleaning {location}, home cleaning, office cleaning {location}",
    },
    CategoryTemplate {
        id: "16",
        name: "💻 IT/Web Agency",
        title: "{name} – Web Development & IT Services in {location}",
        description: "{name} offers web development, app development, and IT solutions in {location}. Professional digital services for your business.",
        keywords: "web development {location}, {name}, IT services {location}, app development, website design {location}, digital agency",
    },
    CategoryTemplate {
        id: "17",
        name: "⚖️ Law Firm",
        title: "{name} – Law Firm & Legal Services in {location}",
        description: "{name} provides expert legal consultation and services in {location}. Experienced lawyers for all your legal needs.",
        keywords: "lawyer {location}, {name}, legal services {location}, law firm, advocate {location}, legal consultation",
    },
    CategoryTemplate {
        id: "18",
        name: "💼 CA/Finance Firm",
        title: "{name} – Chartered Accountant in {location}",
        description: "{name} offers CA services, tax filing, audit, and financial consultation in {location}. Expert accounting solutions.",
        keywords: "chartered accountant {location}, {name}, CA services {location}, tax filing, audit {location}, GST",
    },
    CategoryTemplate {
        id: "19",
        name: "👨‍💻 Developer Portfolio",
        title: "{name} – Web Developer Portfolio | {location}",
        description: "Professional web developer {name} from {location}. Specialized in modern web development, React, Node.js, and full-stack solutions.",
        keywords: "web developer {location}, {name}, portfolio, React developer, full-stack developer {location}, freelance developer",
    },
    CategoryTemplate {
        id: "20",
        name: "🎨 Designer Portfolio",
        title: "{name} – UI/UX Designer Portfolio | {location}",
        description: "Creative UI/UX designer {name} from {location}. Expert in user interface design, user experience, and product design.",
        keywords: "UI UX designer {location}, {name}, portfolio, graphic designer, product designer {location}, freelance designer",
    },
];
