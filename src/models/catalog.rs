use crate::error::Result;
use crate::wire::{FromWire, Keyed, ToWire, Unordered, WireFields, WireObject, WireValue};
use std::collections::HashMap;

/// A purchasable item from the item catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItem {
    /// Bundle properties: items, drop tables and currencies granted when
    /// the bundle is added to an inventory.
    pub bundle: Option<CatalogItemBundleInfo>,
    /// True if an instance of this item can grant a character.
    pub can_become_character: Option<bool>,
    pub catalog_version: Option<String>,
    /// Consumable properties (number of uses, timeout).
    pub consumable: Option<CatalogItemConsumableInfo>,
    /// Container properties: contents and the key item, if any, required
    /// to open it.
    pub container: Option<CatalogItemContainerInfo>,
    /// Game specific custom data.
    pub custom_data: Option<String>,
    pub description: Option<String>,
    pub display_name: Option<String>,
    /// Total instances to allocate the first time a limited edition item
    /// is defined; ignored afterwards or when negative.
    pub initial_limited_edition_count: Option<i32>,
    pub is_limited_edition: Option<bool>,
    /// True if only one instance exists per inventory and grants increment
    /// its remaining uses instead.
    pub is_stackable: Option<bool>,
    pub is_tradable: Option<bool>,
    /// Class to which the item belongs.
    pub item_class: Option<String>,
    /// Unique identifier for this item.
    pub item_id: Option<String>,
    pub item_image_url: Option<String>,
    /// Override prices for this item in real currencies.
    pub real_currency_prices: Option<HashMap<String, i64>>,
    /// Item tags; order carries no meaning.
    pub tags: Option<Unordered<String>>,
    /// Prices in virtual currencies and "RM" (USD pennies).
    pub virtual_currency_prices: Option<HashMap<String, i64>>,
}

impl Keyed for CatalogItem {
    fn sort_key(&self) -> Option<&str> {
        self.item_id.as_deref()
    }
}

impl ToWire for CatalogItem {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Bundle", &self.bundle)
            .optional("CanBecomeCharacter", &self.can_become_character)
            .optional("CatalogVersion", &self.catalog_version)
            .optional("Consumable", &self.consumable)
            .optional("Container", &self.container)
            .optional("CustomData", &self.custom_data)
            .optional("Description", &self.description)
            .optional("DisplayName", &self.display_name)
            .optional(
                "InitialLimitedEditionCount",
                &self.initial_limited_edition_count,
            )
            .optional("IsLimitedEdition", &self.is_limited_edition)
            .optional("IsStackable", &self.is_stackable)
            .optional("IsTradable", &self.is_tradable)
            .optional("ItemClass", &self.item_class)
            .optional("ItemId", &self.item_id)
            .optional("ItemImageUrl", &self.item_image_url)
            .optional("RealCurrencyPrices", &self.real_currency_prices)
            .optional("Tags", &self.tags)
            .optional("VirtualCurrencyPrices", &self.virtual_currency_prices)
            .into_value()
    }
}

impl FromWire for CatalogItem {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            bundle: obj.optional("Bundle")?,
            can_become_character: obj.optional("CanBecomeCharacter")?,
            catalog_version: obj.optional("CatalogVersion")?,
            consumable: obj.optional("Consumable")?,
            container: obj.optional("Container")?,
            custom_data: obj.optional("CustomData")?,
            description: obj.optional("Description")?,
            display_name: obj.optional("DisplayName")?,
            initial_limited_edition_count: obj.optional("InitialLimitedEditionCount")?,
            is_limited_edition: obj.optional("IsLimitedEdition")?,
            is_stackable: obj.optional("IsStackable")?,
            is_tradable: obj.optional("IsTradable")?,
            item_class: obj.optional("ItemClass")?,
            item_id: obj.optional("ItemId")?,
            item_image_url: obj.optional("ItemImageUrl")?,
            real_currency_prices: obj.optional("RealCurrencyPrices")?,
            tags: obj.optional("Tags")?,
            virtual_currency_prices: obj.optional("VirtualCurrencyPrices")?,
        })
    }
}

/// Bundle contents granted when the bundle enters an inventory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItemBundleInfo {
    /// ItemIds added to the inventory with the bundle.
    pub bundled_items: Option<Unordered<String>>,
    /// Drop tables resolved when the bundle is added.
    pub bundled_result_tables: Option<Unordered<String>>,
    /// Currency balances added with the bundle.
    pub bundled_virtual_currencies: Option<HashMap<String, i64>>,
}

impl ToWire for CatalogItemBundleInfo {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("BundledItems", &self.bundled_items)
            .optional("BundledResultTables", &self.bundled_result_tables)
            .optional("BundledVirtualCurrencies", &self.bundled_virtual_currencies)
            .into_value()
    }
}

impl FromWire for CatalogItemBundleInfo {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            bundled_items: obj.optional("BundledItems")?,
            bundled_result_tables: obj.optional("BundledResultTables")?,
            bundled_virtual_currencies: obj.optional("BundledVirtualCurrencies")?,
        })
    }
}

/// Consumable properties of a catalog item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItemConsumableInfo {
    /// Uses before the item is removed from the inventory.
    pub usage_count: Option<i64>,
    /// Seconds the item remains in the inventory before removal.
    pub usage_period: Option<i64>,
    /// Items sharing a non-null group pool their usage periods.
    pub usage_period_group: Option<String>,
}

impl ToWire for CatalogItemConsumableInfo {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("UsageCount", &self.usage_count)
            .optional("UsagePeriod", &self.usage_period)
            .optional("UsagePeriodGroup", &self.usage_period_group)
            .into_value()
    }
}

impl FromWire for CatalogItemConsumableInfo {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            usage_count: obj.optional("UsageCount")?,
            usage_period: obj.optional("UsagePeriod")?,
            usage_period_group: obj.optional("UsagePeriodGroup")?,
        })
    }
}

/// Container properties: contents unlocked with the key item, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItemContainerInfo {
    /// ItemIds added to the inventory once the container is unlocked.
    pub item_contents: Option<Unordered<String>>,
    /// Catalog item required to unlock the container, if any.
    pub key_item_id: Option<String>,
    /// Drop tables resolved when the container is unlocked.
    pub result_table_contents: Option<Unordered<String>>,
    /// Currency balances added when the container is unlocked.
    pub virtual_currency_contents: Option<HashMap<String, i64>>,
}

impl ToWire for CatalogItemContainerInfo {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("ItemContents", &self.item_contents)
            .optional("KeyItemId", &self.key_item_id)
            .optional("ResultTableContents", &self.result_table_contents)
            .optional("VirtualCurrencyContents", &self.virtual_currency_contents)
            .into_value()
    }
}

impl FromWire for CatalogItemContainerInfo {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            item_contents: obj.optional("ItemContents")?,
            key_item_id: obj.optional("KeyItemId")?,
            result_table_contents: obj.optional("ResultTableContents")?,
            virtual_currency_contents: obj.optional("VirtualCurrencyContents")?,
        })
    }
}

/// Requests the contents of a catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetCatalogItemsRequest {
    /// Catalog being requested; the default catalog when omitted.
    pub catalog_version: Option<String>,
}

impl ToWire for GetCatalogItemsRequest {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("CatalogVersion", &self.catalog_version)
            .into_value()
    }
}

impl FromWire for GetCatalogItemsRequest {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            catalog_version: obj.optional("CatalogVersion")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GetCatalogItemsResult {
    /// Purchasable items, unordered by ItemId.
    pub catalog: Option<Unordered<CatalogItem>>,
}

impl ToWire for GetCatalogItemsResult {
    fn to_wire(&self) -> WireValue {
        WireFields::new()
            .optional("Catalog", &self.catalog)
            .into_value()
    }
}

impl FromWire for GetCatalogItemsResult {
    fn from_wire(value: &WireValue, path: &str) -> Result<Self> {
        let obj = WireObject::new(value, path)?;
        Ok(Self {
            catalog: obj.optional("Catalog")?,
        })
    }
}
