// wire types for the services the site talks to
//
// the site has no backend of its own, so the only remote api is the
// transactional mail service behind the contact form
pub mod mail;
