use crate::{
    arg::Argument,
    feedback::{exceptions, CommandSyntaxError},
    reader::ArgumentReader,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

/// Resolves numeric identifiers into domain entities of type `E`. The command source
/// implements this for every kind of entity its commands accept.
pub trait EntityLookup<E> {
    /// Returns the entity with the given id, or `None` if there is none.
    fn find_entity(&self, id: u64) -> Option<E>;
}

/// The shape of a mention which refers to an entity by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionStyle {
    /// `<@id>` or `<@!id>`
    User,
    /// `<@&id>`
    Role,
    /// `<#id>`
    Channel,
}

impl MentionStyle {
    /// Extracts the id from a mention of this style.
    pub fn extract_id(self, token: &str) -> Option<u64> {
        lazy_static! {
            static ref USER: Regex = Regex::new(r"^<@!?(\d+)>$").unwrap();
            static ref ROLE: Regex = Regex::new(r"^<@&(\d+)>$").unwrap();
            static ref CHANNEL: Regex = Regex::new(r"^<#(\d+)>$").unwrap();
        }

        let pattern: &Regex = match self {
            MentionStyle::User => &*USER,
            MentionStyle::Role => &*ROLE,
            MentionStyle::Channel => &*CHANNEL,
        };

        pattern
            .captures(token)
            .and_then(|captures| captures.get(1))
            .and_then(|id| id.as_str().parse().ok())
    }
}

/// An entity given by its numeric id or, where a mention style is set, by a mention. The
/// entity itself is found through the source's [`EntityLookup`].
pub struct EntityArgument<E> {
    label: &'static str,
    mention: Option<MentionStyle>,
    _marker: PhantomData<fn() -> E>,
}

impl<E> EntityArgument<E> {
    /// An entity referred to by id only. The label names the entity in error messages.
    pub fn by_id(label: &'static str) -> Self {
        EntityArgument {
            label,
            mention: None,
            _marker: PhantomData,
        }
    }

    /// An entity referred to by id or by a mention of the given style.
    pub fn mentionable(label: &'static str, mention: MentionStyle) -> Self {
        EntityArgument {
            label,
            mention: Some(mention),
            _marker: PhantomData,
        }
    }

    /// A user, by id or `<@id>` mention.
    pub fn user() -> Self {
        Self::mentionable("user", MentionStyle::User)
    }

    /// A role, by id or `<@&id>` mention.
    pub fn role() -> Self {
        Self::mentionable("role", MentionStyle::Role)
    }

    /// A channel, by id or `<#id>` mention.
    pub fn channel() -> Self {
        Self::mentionable("channel", MentionStyle::Channel)
    }
}

impl<E> Clone for EntityArgument<E> {
    fn clone(&self) -> Self {
        EntityArgument {
            label: self.label,
            mention: self.mention,
            _marker: PhantomData,
        }
    }
}

impl<E> Debug for EntityArgument<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityArgument")
            .field("label", &self.label)
            .field("mention", &self.mention)
            .finish()
    }
}

impl<C, E> Argument<C> for EntityArgument<E>
where C: EntityLookup<E> + ?Sized
{
    type Output = E;

    fn parse(&self, reader: &mut ArgumentReader<'_, C>) -> Result<E, CommandSyntaxError> {
        let source = reader.source();
        reader.parse_next(|token| {
            if let Ok(id) = token.parse::<u64>() {
                return source
                    .find_entity(id)
                    .ok_or_else(|| exceptions::ENTITY_NOT_FOUND.create(self.label, &id));
            }

            match self.mention.and_then(|style| style.extract_id(token)) {
                Some(id) => source
                    .find_entity(id)
                    .ok_or_else(|| exceptions::MENTION_NOT_FOUND.create(self.label)),
                None => Err(exceptions::INVALID_ENTITY.create(
                    token,
                    self.label,
                    &self.mention.is_some(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::ErrorKind;

    #[derive(Debug, PartialEq)]
    struct User(u64);

    #[derive(Debug, PartialEq)]
    struct Channel(u64);

    struct Guild;

    impl EntityLookup<User> for Guild {
        fn find_entity(&self, id: u64) -> Option<User> {
            if id < 100 {
                Some(User(id))
            } else {
                None
            }
        }
    }

    impl EntityLookup<Channel> for Guild {
        fn find_entity(&self, id: u64) -> Option<Channel> {
            Some(Channel(id))
        }
    }

    #[test]
    fn mentions() {
        assert_eq!(MentionStyle::User.extract_id("<@42>"), Some(42));
        assert_eq!(MentionStyle::User.extract_id("<@!42>"), Some(42));
        assert_eq!(MentionStyle::User.extract_id("<@&42>"), None);
        assert_eq!(MentionStyle::Role.extract_id("<@&42>"), Some(42));
        assert_eq!(MentionStyle::Channel.extract_id("<#7>"), Some(7));
        assert_eq!(MentionStyle::Channel.extract_id("#7"), None);
    }

    #[test]
    fn resolves_through_the_source() {
        let mut reader = ArgumentReader::new("!kick 5 <@!6> <#9>", &Guild);
        assert_eq!(EntityArgument::<User>::user().parse(&mut reader), Ok(User(5)));
        assert_eq!(EntityArgument::<User>::user().parse(&mut reader), Ok(User(6)));
        assert_eq!(EntityArgument::<Channel>::channel().parse(&mut reader), Ok(Channel(9)));
    }

    #[test]
    fn lookup_failures() {
        let mut reader = ArgumentReader::new("!kick 500 <@501> bob bob", &Guild);
        let user = EntityArgument::<User>::user();

        let error = user.parse(&mut reader).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.to_string(), "No user with id `500` could be found");

        let error = user.parse(&mut reader).unwrap_err();
        assert_eq!(error.to_string(), "The user in the mention could not be found");

        let error = user.parse(&mut reader).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
        assert_eq!(error.to_string(), "`bob` is not a valid user id or user mention");

        let error = EntityArgument::<Channel>::by_id("channel").parse(&mut reader).unwrap_err();
        assert_eq!(error.to_string(), "`bob` is not a valid channel id");
    }
}
