use super::types::LocalizedField;

pub const DEFAULT_CONTACT_EMAIL: &str = "marketing@cmpindustri.com";
pub const CONTACT_PHONE: &str = "+62 21 29870890";

const ADDRESS: &str = "Jl. Raya Serang KM. 24 Kawasan Pergudangan Aneka Sinar Mutiara, Blok C No 01-03, Balajara, Tangerang, Banten 15610";

pub(super) const CONTACT_ADDRESS: LocalizedField = LocalizedField::new(ADDRESS, ADDRESS);

pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3966.5151200529954!2d106.44992927475029!3d-6.195558493792084!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x2e42017078b9f747%3A0xdb15c4c44ef9e4da!2sPT%20Cipta%20Metalindo%20Persada!5e0!3m2!1sen!2sid!4v1771919127068!5m2!1sen!2sid";
