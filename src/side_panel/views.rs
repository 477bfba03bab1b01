use super::SidePanelView;

/// A side-panel view with a fixed title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamedView {
    pub section: &'static str,
    pub name: &'static str,
    pub title: &'static str,
}

impl NamedView {
    const fn new(section: &'static str, name: &'static str, title: &'static str) -> Self {
        Self {
            section,
            name,
            title,
        }
    }

    pub fn view(&self) -> SidePanelView {
        SidePanelView::new(self.section, self.name)
    }
}

pub const ADD_ALIAS: NamedView = NamedView::new("machineForm", "addAlias", "Add alias");
pub const ADD_BOND: NamedView = NamedView::new("machineForm", "addBond", "Create bond");
pub const ADD_BRIDGE: NamedView = NamedView::new("machineForm", "addBridge", "Create bridge");
pub const ADD_CONTROLLER: NamedView =
    NamedView::new("controllerForm", "addController", "Add controller");
pub const ADD_CHASSIS: NamedView = NamedView::new("machineForm", "addChassis", "Add chassis");
pub const ADD_DISCOVERY: NamedView =
    NamedView::new("networkDiscoveryForm", "addDiscovery", "Add discovery");
pub const ADD_DOMAIN: NamedView = NamedView::new("domainForm", "addDomain", "Add domains");
pub const ADD_INTERFACE: NamedView =
    NamedView::new("machineForm", "addInterface", "Add interface");
pub const ADD_MACHINE: NamedView = NamedView::new("machineForm", "addMachine", "Add machine");
pub const ADD_DEVICE: NamedView = NamedView::new("deviceForm", "addDevice", "Add device");
pub const ADD_SPECIAL_FILESYSTEM: NamedView = NamedView::new(
    "machineForm",
    "addSpecialFilesystem",
    "Add special filesystem",
);
pub const ADD_TAG: NamedView = NamedView::new("tagForm", "addTag", "Create new tag");
pub const ADD_VLAN: NamedView = NamedView::new("vlanForm", "addVlan", "Add VLAN");
pub const CHANGE_SOURCE: NamedView = NamedView::new("imageForm", "changeSource", "Change source");
pub const APPLY_STORAGE_LAYOUT: NamedView = NamedView::new(
    "machineForm",
    "applyStorageLayout",
    "Change storage layout",
);
pub const CLEAR_ALL_DISCOVERIES: NamedView = NamedView::new(
    "networkDiscoveryForm",
    "clearAllDiscoveries",
    "Clear all discoveries",
);
pub const CREATE_CACHE_SET: NamedView =
    NamedView::new("machineForm", "createCacheSet", "Create cache set");
pub const CREATE_DATASTORE: NamedView =
    NamedView::new("machineForm", "createDatastore", "Create datastore");
pub const CREATE_PARTITION: NamedView =
    NamedView::new("machineForm", "createPartition", "Create partition");
pub const CREATE_RAID: NamedView = NamedView::new("machineForm", "createRaid", "Create raid");
pub const CREATE_VOLUME_GROUP: NamedView =
    NamedView::new("machineForm", "createVolumeGroup", "Create volume group");
pub const DELETE_DISCOVERY: NamedView =
    NamedView::new("networkDiscoveryForm", "deleteDiscovery", "Delete discovery");
pub const DELETE_DISK: NamedView = NamedView::new("machineForm", "deleteDisk", "Delete disk");
pub const DELETE_TAG: NamedView = NamedView::new("tagForm", "deleteTag", "Delete tag");
pub const EDIT_INTERFACE: NamedView =
    NamedView::new("machineForm", "editInterface", "Edit interface");
pub const CREATE_ZONE: NamedView = NamedView::new("zoneForm", "createZone", "Add AZ");
pub const EDIT_DISK: NamedView = NamedView::new("machineForm", "editDisk", "Edit disk");
pub const EDIT_PHYSICAL: NamedView =
    NamedView::new("machineForm", "editPhysical", "Edit physical");
pub const DELETE_IMAGE: NamedView = NamedView::new("imageForm", "deleteImage", "Delete image");
pub const DELETE_SPACE: NamedView = NamedView::new("spaceForm", "deleteSpace", "Delete space");
pub const DELETE_FABRIC: NamedView = NamedView::new("fabricForm", "deleteFabric", "Delete fabric");
pub const MARK_CONNECTED: NamedView =
    NamedView::new("machineForm", "markConnected", "Mark as connected");
pub const MARK_DISCONNECTED: NamedView =
    NamedView::new("machineForm", "markDisconnected", "Mark as disconnected");
pub const REMOVE_INTERFACE: NamedView =
    NamedView::new("machineForm", "removeInterface", "Remove interface");
pub const REMOVE_PHYSICAL: NamedView =
    NamedView::new("machineForm", "removePhysical", "Remove physical");
pub const SET_BOOT_DISK: NamedView = NamedView::new("machineForm", "setBootDisk", "Set boot disk");
pub const SET_DEFAULT: NamedView = NamedView::new("domainForm", "setDefault", "Set default");
pub const UPDATE_DATASTORE: NamedView =
    NamedView::new("machineForm", "updateDatastore", "Update datastore");
pub const UPDATE_TAG: NamedView = NamedView::new("tagForm", "updateTag", "Update Tag");

/// Every view with a fixed title.
pub static ALL: [NamedView; 39] = [
    ADD_ALIAS,
    ADD_BOND,
    ADD_BRIDGE,
    ADD_CONTROLLER,
    ADD_CHASSIS,
    ADD_DISCOVERY,
    ADD_DOMAIN,
    ADD_INTERFACE,
    ADD_MACHINE,
    ADD_DEVICE,
    ADD_SPECIAL_FILESYSTEM,
    ADD_TAG,
    ADD_VLAN,
    CHANGE_SOURCE,
    APPLY_STORAGE_LAYOUT,
    CLEAR_ALL_DISCOVERIES,
    CREATE_CACHE_SET,
    CREATE_DATASTORE,
    CREATE_PARTITION,
    CREATE_RAID,
    CREATE_VOLUME_GROUP,
    DELETE_DISCOVERY,
    DELETE_DISK,
    DELETE_TAG,
    EDIT_INTERFACE,
    CREATE_ZONE,
    EDIT_DISK,
    EDIT_PHYSICAL,
    DELETE_IMAGE,
    DELETE_SPACE,
    DELETE_FABRIC,
    MARK_CONNECTED,
    MARK_DISCONNECTED,
    REMOVE_INTERFACE,
    REMOVE_PHYSICAL,
    SET_BOOT_DISK,
    SET_DEFAULT,
    UPDATE_DATASTORE,
    UPDATE_TAG,
];

/// Looks up a catalogued view by the name half of its tag.
pub fn find_by_name(name: &str) -> Option<&'static NamedView> {
    ALL.iter().find(|view| view.name == name)
}
