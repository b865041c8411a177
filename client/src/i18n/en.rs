use super::*;

pub(super) static EN: Translations = Translations {
    nav: NavText { home: "Home", about: "About Us", products: "Products", contact: "Contact" },
    hero: HeroText {
        title: "Precision Metal Manufacturing You Can Trust",
        subtitle: "PT Cipta Metalindo Persada delivers high-quality stamped, machined and assembled components for the automotive, household and industrial sectors.",
        cta: "Learn More",
    },
    home: HomeText {
        trusted_by: "Trusted by leading manufacturers",
        featured_products: "Featured Products",
        featured_desc: "A selection of components we produce every day for partners across Indonesia and beyond.",
        view_all: "View All Products",
    },
    about: AboutText {
        hero_title: "About CMP",
        hero_subtitle: "Building quality components with precision, integrity and continuous improvement.",
        who_we_are: "✦ Who We Are",
        company_title: "Manufacturing Excellence Since Day One",
        company_desc: "PT Cipta Metalindo Persada is a metal component manufacturer serving automotive, household and industrial customers with stamping, machining, rubber and assembly capabilities.",
        company_desc2: "Our team combines experienced engineers with modern production lines to deliver consistent quality, competitive pricing and dependable lead times.",
        iso_certified: "ISO Certified",
        global_reach: "Global Reach",
        certified: "Certified",
        stats_years: "Years of Experience",
        by_the_numbers: "✦ By The Numbers",
        impact_title: "Our Impact & Growth",
        our_purpose: "✦ Our Purpose",
        vision_mission: "Vision & Mission",
        vision_title: "Our Vision",
        vision_desc: "To be the most trusted precision component partner in Southeast Asia, recognised for quality, innovation and responsible manufacturing.",
        mission_title: "Our Mission",
        missions: [
            "Deliver components that meet or exceed customer specifications.",
            "Invest continuously in people, machinery and process improvement.",
            "Build long-term partnerships founded on transparency and reliability.",
            "Operate safely and responsibly for our employees and community.",
        ],
        our_journey: "✦ Our Journey",
        timeline_title: "Our Milestones",
        timeline_desc: "From humble beginnings to industry leadership — our story of growth and innovation.",
        cta_title: "Ready to Partner With Us?",
        cta_desc: "Let's discuss how we can bring your manufacturing vision to life with precision and quality.",
        cta_button: "Get In Touch",
    },
    products: ProductsText {
        title: "Our Products",
        subtitle: "Explore our range of precision components across every industry we serve.",
        showing: "Showing",
        of: "of",
        products_label: "products",
        grid_view: "Grid",
        list_view: "List",
        view_details: "View Details",
        no_products: "No products found in this category.",
        prev: "Previous",
        next: "Next",
        categories: CategoryText {
            all: "All",
            two_wheel: "2 Wheel",
            four_wheel: "4 Wheel",
            household: "Household",
            screen_oil: "Screen Oil",
            rubber: "Rubber",
            cnc: "CNC",
            pvc: "PVC",
            others: "Others",
        },
    },
    contact: ContactText {
        title: "Contact Us",
        subtitle: "Have a question or a project in mind? Send us a message and our team will get back to you.",
        send_us_message: "Send Us a Message",
        contact_information: "Contact Information",
        reach_out: "Reach out through any of the channels below.",
        phone: "Phone",
        email: "Email",
        address: "Address",
        office_hours: "Office Hours",
        office_hours_value: "Mon – Fri, 08:00 – 17:00",
        form_name: "Full Name",
        form_email: "Email Address",
        form_subject: "Subject",
        form_message: "Message",
        placeholder_name: "John Doe",
        placeholder_email: "john@example.com",
        placeholder_subject: "Product Inquiry",
        placeholder_message: "Tell us about your requirements...",
        form_submit: "Send Message",
        form_sending: "Sending...",
        form_success: "Thank you! Your message has been sent successfully.",
        form_error: "Sorry, something went wrong. Please try again.",
    },
    footer: FooterText {
        description: "Precision metal components for the automotive, household and industrial sectors.",
        quick_links: "Quick Links",
        contact_info: "Contact Info",
        location: "Location",
        rights: "All rights reserved.",
        privacy: "Privacy Policy",
        terms: "Terms of Service",
    },
    locale: LocaleText { switch_label: "EN", current: "English", other_label: "ID", other_name: "Indonesia" },
};
