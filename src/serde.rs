use std::fmt;
use std::marker::PhantomData;

use hashbrown::HashMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::{ComponentStore, EntityHandle, MultiStore};

// Stores are written as their two dense arrays. The sparse side is rebuilt on load, so
// a snapshot never carries positions that could disagree with the dense order.
const FIELDS: &[&str] = &["entities", "components"];

// A handle is written as its bare id. Loading goes through `from_raw`, which moves the
// process counter past every id read back.
impl Serialize for EntityHandle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.id())
    }
}

impl<'de> Deserialize<'de> for EntityHandle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u32::deserialize(deserializer).map(EntityHandle::from_raw)
    }
}

impl<T: Serialize> Serialize for ComponentStore<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ComponentStore", 2)?;
        state.serialize_field("entities", &self.entities)?;
        state.serialize_field("components", &self.components)?;
        state.end()
    }
}

impl<T: Serialize> Serialize for MultiStore<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MultiStore", 2)?;
        state.serialize_field("entities", &self.entities)?;
        state.serialize_field("components", &self.components)?;
        state.end()
    }
}

/// Both dense arrays, read back before any invariant is checked.
struct DenseParts<T> {
    entities: Vec<EntityHandle>,
    components: Vec<T>,
}

struct DensePartsVisitor<T> {
    name: &'static str,
    _phantom: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for DensePartsVisitor<T> {
    type Value = DenseParts<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} struct with 2 fields: entities, components", self.name)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let entities: Vec<EntityHandle> = seq.next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let components: Vec<T> = seq.next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        check_lengths(entities, components)
    }

    fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut entities: Option<Vec<EntityHandle>> = None;
        let mut components: Option<Vec<T>> = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "entities" => {
                    if entities.is_some() {
                        return Err(de::Error::duplicate_field("entities"));
                    }
                    entities = Some(map.next_value()?);
                }
                "components" => {
                    if components.is_some() {
                        return Err(de::Error::duplicate_field("components"));
                    }
                    components = Some(map.next_value()?);
                }
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }
        let entities = entities.ok_or_else(|| de::Error::missing_field("entities"))?;
        let components = components.ok_or_else(|| de::Error::missing_field("components"))?;
        check_lengths(entities, components)
    }
}

fn check_lengths<T, E: de::Error>(entities: Vec<EntityHandle>, components: Vec<T>) -> Result<DenseParts<T>, E> {
    if entities.len() != components.len() {
        return Err(E::custom(format!(
            "{} owners for {} components",
            entities.len(),
            components.len()
        )));
    }
    Ok(DenseParts { entities, components })
}

fn deserialize_parts<'de, D, T>(deserializer: D, name: &'static str) -> Result<DenseParts<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_struct(
        name,
        FIELDS,
        DensePartsVisitor { name, _phantom: PhantomData },
    )
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ComponentStore<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let DenseParts { entities, components } = deserialize_parts(deserializer, "ComponentStore")?;
        let mut sparse = HashMap::with_capacity(entities.len());
        for (index, &entity) in entities.iter().enumerate() {
            if sparse.insert(entity, index).is_some() {
                return Err(de::Error::custom(format!(
                    "entity {entity} owns more than one `{}` component",
                    std::any::type_name::<T>()
                )));
            }
        }
        Ok(ComponentStore { sparse, components, entities })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MultiStore<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let DenseParts { entities, components } = deserialize_parts(deserializer, "MultiStore")?;
        let mut counts = HashMap::new();
        for &entity in &entities {
            *counts.entry(entity).or_insert(0) += 1;
        }
        Ok(MultiStore { counts, components, entities })
    }
}
